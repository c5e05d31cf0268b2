use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SidebarError {
    #[error("use_sidebar must be used within a SidebarProvider")]
    OutsideProvider,
}
