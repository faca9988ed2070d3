//! Centralized icon definitions.
//!
//! Maps semantic icon names to Lucide icons.

use icondata::Icon;

pub const UPLOAD: Icon = icondata::LuUpload;
pub const SEND: Icon = icondata::LuSend;
