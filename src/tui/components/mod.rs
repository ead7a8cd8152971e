//! # TUI Components
//!
//! All UI components for the terminal browser.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: Top status bar with the city scope and status message
//! - `StatisticsOverlay`: Popup over a `StatisticsReport`
//! - `AboutOverlay`: Static "About" popup
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `SearchBox`: Live search field
//! - `PickerState` / `Picker`: City, university and faculty lists
//! - `DetailsState` / `Details`: Tabbed, scrollable information panel
//!
//! Components receive external data as props (struct fields or wrapper
//! arguments), not by reaching into global state:
//!
//! ```rust,ignore
//! // Dependencies are explicit
//! Details::new(&mut tui.details, app).render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs          (this file)
//! ├── title_bar.rs    (Top status bar)
//! ├── search_box.rs   (Quick search input)
//! ├── picker.rs       (Generic highlightable list)
//! ├── details.rs      (Main Information / Detailed View tabs)
//! ├── statistics.rs   (Statistics overlay)
//! └── about.rs        (About overlay)
//! ```

mod about;
mod title_bar;
pub use about::AboutOverlay;
pub use title_bar::TitleBar;

pub mod details;
pub mod picker;
pub mod search_box;
pub mod statistics;
pub use details::{Details, DetailsState};
pub use picker::{Picker, PickerEvent, PickerState};
pub use search_box::{SearchBox, SearchEvent};
pub use statistics::StatisticsOverlay;
