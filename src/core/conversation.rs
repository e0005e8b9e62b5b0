//! Scripted conversation playback
//!
//! The landing page demonstrates the widget with pre-authored chat
//! sequences. A [`ConversationScript`] is a list of timed steps; playback
//! maps a wall-clock elapsed time (modulo the cycle length) to the highest
//! step already reached, so the loop stays in sync even when the host tab
//! throttles timers and restarts cleanly without any bookkeeping.

/// Who authored a scripted chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Ai,
    User,
}

/// One message of a scripted demo conversation.
///
/// Ordered, insertion order = display order, never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub text: &'static str,
}

impl ChatMessage {
    pub const fn ai(text: &'static str) -> Self {
        Self {
            role: Role::Ai,
            text,
        }
    }

    pub const fn user(text: &'static str) -> Self {
        Self {
            role: Role::User,
            text,
        }
    }
}

/// What happens at a given point of the scripted cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepKind {
    /// The assistant opens the conversation unprompted.
    Proactive,
    /// The visitor's scripted reply appears.
    UserReply,
    /// The typing indicator is shown.
    Typing,
    /// The assistant's scripted reply appears.
    AiReply,
    /// The widget collapses into its minimized pill.
    Minimize,
    /// End of cycle; playback wraps back to the first step.
    Reset,
}

/// A step of the script: `kind` becomes active `offset_ms` after the start
/// of the cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConversationStep {
    pub offset_ms: u32,
    pub kind: StepKind,
}

impl ConversationStep {
    pub const fn new(offset_ms: u32, kind: StepKind) -> Self {
        Self { offset_ms, kind }
    }
}

/// Errors rejected by [`ConversationScript::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScriptError {
    #[error("a script needs at least two steps")]
    TooShort,
    #[error("the first step must be scheduled at offset zero")]
    NonZeroStart,
    #[error("step offsets must be strictly increasing")]
    NonMonotonic,
}

/// Visual state of the phone-frame demo, derived from the current step.
///
/// Every flag is monotonic within one cycle: once set it stays set until
/// the cycle wraps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlaybackFlags {
    pub show_proactive: bool,
    pub show_user: bool,
    pub show_typing: bool,
    pub show_ai: bool,
    pub minimized: bool,
}

/// A validated, cyclic sequence of timed steps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversationScript {
    steps: Vec<ConversationStep>,
}

impl ConversationScript {
    /// Validate and build a script.
    ///
    /// Invariants: at least two steps, the first at offset zero, offsets
    /// strictly increasing. The final step's offset is the cycle length
    /// and doubles as the wrap point, so [`Self::step_at`] never returns
    /// the last index.
    pub fn new(steps: Vec<ConversationStep>) -> Result<Self, ScriptError> {
        if steps.len() < 2 {
            return Err(ScriptError::TooShort);
        }
        if steps[0].offset_ms != 0 {
            return Err(ScriptError::NonZeroStart);
        }
        if steps.windows(2).any(|w| w[1].offset_ms <= w[0].offset_ms) {
            return Err(ScriptError::NonMonotonic);
        }
        Ok(Self { steps })
    }

    pub fn steps(&self) -> &[ConversationStep] {
        &self.steps
    }

    /// Length of one full cycle in milliseconds.
    pub fn cycle_ms(&self) -> u32 {
        self.steps[self.steps.len() - 1].offset_ms
    }

    /// Map an elapsed wall-clock time to the current step index.
    ///
    /// Elapsed time is taken modulo the cycle length, then the highest
    /// step whose offset is not in the future wins. Within one cycle the
    /// result is non-decreasing in `elapsed_ms`, and it wraps to 0 when
    /// the cycle length is passed.
    pub fn step_at(&self, elapsed_ms: f64) -> usize {
        let wrapped = elapsed_ms.rem_euclid(f64::from(self.cycle_ms()));
        self.steps
            .iter()
            .rposition(|step| f64::from(step.offset_ms) <= wrapped)
            .unwrap_or(0)
    }

    /// Kind of the step at `index` (clamped to the script length).
    pub fn kind_at(&self, index: usize) -> StepKind {
        self.steps[index.min(self.steps.len() - 1)].kind
    }

    /// Whether the typing indicator is active at `index`.
    pub fn is_typing(&self, index: usize) -> bool {
        self.kind_at(index) == StepKind::Typing
    }

    /// Visual flags for the steps reached so far.
    pub fn flags_at(&self, index: usize) -> PlaybackFlags {
        let mut flags = PlaybackFlags::default();
        for step in self.steps.iter().take(index + 1) {
            match step.kind {
                StepKind::Proactive => flags.show_proactive = true,
                StepKind::UserReply => flags.show_user = true,
                StepKind::Typing => flags.show_typing = true,
                StepKind::AiReply => flags.show_ai = true,
                StepKind::Minimize => flags.minimized = true,
                StepKind::Reset => flags = PlaybackFlags::default(),
            }
        }
        flags
    }

    /// Number of scripted messages revealed once `index` is reached.
    ///
    /// Counts the message-bearing kinds (proactive, user and AI replies);
    /// typing and minimize steps reveal nothing. The chat-log demo zips
    /// this against its message list.
    pub fn messages_revealed(&self, index: usize) -> usize {
        self.steps
            .iter()
            .take(index + 1)
            .filter(|step| {
                matches!(
                    step.kind,
                    StepKind::Proactive | StepKind::UserReply | StepKind::AiReply
                )
            })
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_script() -> ConversationScript {
        ConversationScript::new(vec![
            ConversationStep::new(0, StepKind::Proactive),
            ConversationStep::new(1200, StepKind::UserReply),
            ConversationStep::new(2400, StepKind::Typing),
            ConversationStep::new(3300, StepKind::AiReply),
            ConversationStep::new(5200, StepKind::Minimize),
            ConversationStep::new(8200, StepKind::Reset),
        ])
        .unwrap()
    }

    #[test]
    fn test_rejects_short_scripts() {
        assert_eq!(
            ConversationScript::new(vec![]),
            Err(ScriptError::TooShort)
        );
        assert_eq!(
            ConversationScript::new(vec![ConversationStep::new(0, StepKind::Proactive)]),
            Err(ScriptError::TooShort)
        );
    }

    #[test]
    fn test_rejects_nonzero_start() {
        let steps = vec![
            ConversationStep::new(100, StepKind::Proactive),
            ConversationStep::new(200, StepKind::Reset),
        ];
        assert_eq!(ConversationScript::new(steps), Err(ScriptError::NonZeroStart));
    }

    #[test]
    fn test_rejects_non_monotonic_offsets() {
        let steps = vec![
            ConversationStep::new(0, StepKind::Proactive),
            ConversationStep::new(500, StepKind::UserReply),
            ConversationStep::new(500, StepKind::Reset),
        ];
        assert_eq!(ConversationScript::new(steps), Err(ScriptError::NonMonotonic));

        let steps = vec![
            ConversationStep::new(0, StepKind::Proactive),
            ConversationStep::new(900, StepKind::UserReply),
            ConversationStep::new(400, StepKind::Reset),
        ];
        assert_eq!(ConversationScript::new(steps), Err(ScriptError::NonMonotonic));
    }

    #[test]
    fn test_cycle_length_is_last_offset() {
        assert_eq!(demo_script().cycle_ms(), 8200);
    }

    #[test]
    fn test_step_index_follows_offsets() {
        let script = demo_script();
        assert_eq!(script.step_at(0.0), 0);
        assert_eq!(script.step_at(1199.0), 0);
        assert_eq!(script.step_at(1200.0), 1);
        assert_eq!(script.step_at(2400.0), 2);
        assert_eq!(script.step_at(3299.0), 2);
        assert_eq!(script.step_at(3300.0), 3);
        assert_eq!(script.step_at(5200.0), 4);
        assert_eq!(script.step_at(8199.9), 4);
    }

    #[test]
    fn test_step_index_is_non_decreasing_within_a_cycle() {
        let script = demo_script();
        let mut previous = 0;
        let mut t = 0.0;
        while t < f64::from(script.cycle_ms()) {
            let index = script.step_at(t);
            assert!(index >= previous, "index regressed at t={t}");
            previous = index;
            t += 7.0;
        }
    }

    #[test]
    fn test_step_index_wraps_past_cycle_length() {
        let script = demo_script();
        assert_eq!(script.step_at(8200.0), 0);
        assert_eq!(script.step_at(8200.0 + 1200.0), 1);
        assert_eq!(script.step_at(3.0 * 8200.0 + 3300.0), 3);
    }

    #[test]
    fn test_last_step_is_never_current() {
        let script = demo_script();
        let mut t = 0.0;
        while t < 3.0 * f64::from(script.cycle_ms()) {
            assert!(script.step_at(t) < script.steps().len() - 1);
            t += 13.0;
        }
    }

    #[test]
    fn test_flags_accumulate_monotonically() {
        let script = demo_script();

        assert_eq!(
            script.flags_at(0),
            PlaybackFlags {
                show_proactive: true,
                ..PlaybackFlags::default()
            }
        );

        let at_typing = script.flags_at(2);
        assert!(at_typing.show_proactive && at_typing.show_user && at_typing.show_typing);
        assert!(!at_typing.show_ai && !at_typing.minimized);

        let at_minimize = script.flags_at(4);
        assert!(at_minimize.show_ai && at_minimize.minimized);
        // Earlier flags survive later steps.
        assert!(at_minimize.show_proactive && at_minimize.show_user);
    }

    #[test]
    fn test_typing_indicator_tracks_current_step_only() {
        let script = demo_script();
        assert!(!script.is_typing(1));
        assert!(script.is_typing(2));
        assert!(!script.is_typing(3));
    }

    #[test]
    fn test_messages_revealed_counts_message_steps() {
        // ai, user, typing, ai, user, ai chat-log sequence.
        let script = ConversationScript::new(vec![
            ConversationStep::new(0, StepKind::Proactive),
            ConversationStep::new(1500, StepKind::Typing),
            ConversationStep::new(2000, StepKind::UserReply),
            ConversationStep::new(2500, StepKind::AiReply),
            ConversationStep::new(4000, StepKind::UserReply),
            ConversationStep::new(4500, StepKind::AiReply),
            ConversationStep::new(12000, StepKind::Reset),
        ])
        .unwrap();

        assert_eq!(script.messages_revealed(0), 1);
        assert_eq!(script.messages_revealed(1), 1); // typing reveals nothing
        assert_eq!(script.messages_revealed(2), 2);
        assert_eq!(script.messages_revealed(5), 5);
    }

    #[test]
    fn test_chat_message_constructors() {
        let m = ChatMessage::ai("hello");
        assert_eq!(m.role, Role::Ai);
        let m = ChatMessage::user("hi");
        assert_eq!(m.role, Role::User);
    }
}
