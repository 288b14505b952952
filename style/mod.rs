/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

pub mod color;
pub mod theme;

pub use color::{ColorParseError, CssColor, TextColor, text_color_for_background};
pub use theme::IntersectionBreakpoint;
