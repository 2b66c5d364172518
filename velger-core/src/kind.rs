//! Extension kind tags.

use std::fmt::Debug;

/// A marker trait for category tags that classify extension contexts.
///
/// A kind identifies which subsystem or use case a context belongs to.
/// Callers typically define one enum per application and derive everything:
///
/// ```rust,ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum OrderKind { Create, Cancel }
///
/// impl ExtensionKind for OrderKind {}
/// ```
///
/// Kinds are compared by equality and rendered with `Debug` in diagnostics,
/// so the bounds are exactly what dispatch and error reporting need.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid ExtensionKind",
    label = "must be `Debug + Copy + PartialEq + Send + Sync + 'static`",
    note = "Kind tags are small immutable values compared by equality."
)]
pub trait ExtensionKind: Debug + Copy + PartialEq + Send + Sync + 'static {}

// Common ExtensionKind implementations
impl ExtensionKind for () {}
impl ExtensionKind for &'static str {}
