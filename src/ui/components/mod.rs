//! Concrete widgets

pub mod activity_indicator;
pub mod button;
pub mod container;
pub mod date_picker;
pub mod label;
pub mod page_control;
pub mod picker;
pub mod progress_view;
mod rows;
pub mod segmented_control;
pub mod stepper;
pub mod switch;
pub mod table;
pub mod text_field;
pub mod text_view;
pub mod web_view;

pub use activity_indicator::ActivityIndicator;
pub use button::Button;
pub use container::{Container, Panel};
pub use date_picker::DatePicker;
pub use label::Label;
pub use page_control::PageControl;
pub use picker::PickerView;
pub use progress_view::ProgressView;
pub use segmented_control::{clamp_selection, SegmentedControl};
pub use stepper::Stepper;
pub use switch::Switch;
pub use table::SingleItemTable;
pub use text_field::TextField;
pub use text_view::TextView;
pub use web_view::{HeadlessEngine, NavigationEvent, WebEngine, WebView};
