//! MessageKind - marker for routing keys

use std::fmt::Debug;
use std::hash::Hash;

/// Types usable as a routing key.
///
/// A kind is an opaque identifier that only needs to be cheap to copy,
/// comparable and hashable — typically a small enum or integer owned by the
/// embedding protocol layer. The bound is blanket-implemented, so any
/// suitable type qualifies without an explicit impl.
///
/// # Examples
/// ```
/// use contracts::MessageKind;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum PacketKind {
///     Control,
///     Telemetry,
/// }
///
/// fn assert_kind<K: MessageKind>(_kind: K) {}
/// assert_kind(PacketKind::Control);
/// assert_kind(7u32);
/// ```
pub trait MessageKind: Copy + Eq + Hash + Debug + Send + 'static {}

impl<T> MessageKind for T where T: Copy + Eq + Hash + Debug + Send + 'static {}
