/// Marker trait for reducer-owned state.
///
/// States are replaced wholesale on every transition, so they must be
/// cheap to take (`Default`) and comparable for change detection.
pub trait State: Clone + PartialEq + Default + Send + 'static {}
