/// Marker trait for intents: user actions (key presses, selections) and
/// completions of asynchronous work (gateway responses).
pub trait Intent: Send + 'static {}
