/// Aggregated view of session progress, useful for the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    pub total: usize,
    pub position: usize,
    pub score: u32,
    pub remaining: usize,
    pub is_complete: bool,
}
