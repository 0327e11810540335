pub mod layout;
pub mod model;
pub mod state;
pub mod view;
pub mod view_model;

pub use model::{MessageHandler, RuntimeMessageHandler};
pub use view::DisplayWidthEditor;
