//! Valve state resolution
//!
//! A valve carries two independent facets: the measured position (from the
//! endstop feedbacks) and the commanded direction. They are rendered as
//! two independently toggled class groups but cached as one composite
//! state, so a change in either facet is a single cache miss.

use crate::snapshot::ValveTag;

/// Measured valve position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValvePosition {
    FullOpen,
    FullClose,
    /// Neither feedback asserted: in transit. Also the fallback when both
    /// feedbacks are asserted at once, which is not disambiguated further.
    Moving,
}

impl ValvePosition {
    pub fn css_class(&self) -> &'static str {
        match self {
            ValvePosition::FullOpen => "pos-full-open",
            ValvePosition::FullClose => "pos-full-close",
            ValvePosition::Moving => "pos-moving",
        }
    }
}

/// Commanded valve direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValveCommand {
    Open,
    Close,
}

impl ValveCommand {
    pub fn css_class(&self) -> &'static str {
        match self {
            ValveCommand::Open => "cmd-open",
            ValveCommand::Close => "cmd-close",
        }
    }
}

/// Composite valve display state: position x command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValveState {
    pub position: ValvePosition,
    pub command: ValveCommand,
}

/// Resolve a valve tag into its composite display state.
pub fn resolve_valve(tag: &ValveTag) -> ValveState {
    let position = if tag.fb_open {
        ValvePosition::FullOpen
    } else if tag.fb_close {
        ValvePosition::FullClose
    } else {
        ValvePosition::Moving
    };

    let command = if tag.cmd_open {
        ValveCommand::Open
    } else {
        ValveCommand::Close
    };

    ValveState { position, command }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(fb_open: bool, fb_close: bool, cmd_open: bool) -> ValveTag {
        ValveTag { fb_open, fb_close, cmd_open }
    }

    #[test]
    fn test_open_feedback_wins() {
        let state = resolve_valve(&tag(true, false, true));
        assert_eq!(state.position, ValvePosition::FullOpen);
        assert_eq!(state.command, ValveCommand::Open);
    }

    #[test]
    fn test_no_feedback_means_moving() {
        let state = resolve_valve(&tag(false, false, false));
        assert_eq!(state.position, ValvePosition::Moving);
        assert_eq!(state.command, ValveCommand::Close);
    }

    #[test]
    fn test_close_feedback() {
        let state = resolve_valve(&tag(false, true, false));
        assert_eq!(state.position, ValvePosition::FullClose);
    }

    #[test]
    fn test_both_feedbacks_fall_back_to_open() {
        // fbOpen is checked first; a contradictory pair is not
        // disambiguated beyond that.
        let state = resolve_valve(&tag(true, true, false));
        assert_eq!(state.position, ValvePosition::FullOpen);
    }

    #[test]
    fn test_composite_state_equality_spans_both_facets() {
        let a = resolve_valve(&tag(true, false, true));
        let b = resolve_valve(&tag(true, false, false));
        assert_ne!(a, b);
        assert_eq!(a, resolve_valve(&tag(true, false, true)));
    }
}
