//! Core roster data model: employees and role classification, the shift
//! catalog with per-role legality rules, the roster table, and the
//! session facade a grid front end drives.

pub mod dates;
pub mod error;
pub mod role;
pub mod session;
pub mod shift;
pub mod table;

pub use dates::{DateRange, day_label};
pub use error::{RejectedAssignment, Result, RosterError};
pub use role::{Employee, Role, classify};
pub use session::{CellSpec, Session};
pub use shift::{
    ColorKey, DayHalf, SHIFT_FOREGROUND_HEX, SlotStyle, is_editable, is_legal, legal_codes,
    style_of,
};
pub use table::{RosterRow, RosterTable};
