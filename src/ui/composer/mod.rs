//! Email composer feature module.
//!
//! Holds everything the single form screen shows: the email being answered,
//! the selected tone, the generated reply, the in-flight flag, the error
//! alert and the copy notice.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Form state struct
//! - `intent.rs` - User/system actions
//! - `reducer.rs` - State transitions
//! - `view.rs` - Rendering

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::ComposerIntent;
pub use reducer::ComposerReducer;
pub use state::{ComposerState, CopyNotice};
pub use view::{render_composer, reply_scroll_limit};
