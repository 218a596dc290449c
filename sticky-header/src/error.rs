use alloc::string::String;

/// Configuration errors detected while constructing a [`crate::StickyHeader`].
///
/// Both kinds are structural: they are reported once, at construction, and never retried.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The header selector did not match any element.
    #[error("sticky header target `{selector}` not found")]
    TargetNotFound { selector: String },
    /// A selector listed in `element_on_over` did not match any element.
    #[error("region target `{selector}` not found")]
    RegionTargetNotFound { selector: String },
}
