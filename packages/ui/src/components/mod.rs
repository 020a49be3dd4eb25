//! Small styled primitives shared by the views.

mod button;
pub use button::{Button, ButtonVariant};

mod input;
pub use input::{Checkbox, Input, Label};

mod callout;
pub use callout::Callout;

mod dialog;
pub use dialog::Dialog;
