use super::buffer::TerminalLine;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceCompletion {
    EnterWelcome,
    EnterEmail,
    EnterComplete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptStep {
    pub line: TerminalLine,
    pub delay: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedSequence {
    steps: Vec<ScriptStep>,
    lead_in: Duration,
    finish_pause: Duration,
    completion: SequenceCompletion,
}

impl ScriptedSequence {
    pub fn new(
        steps: Vec<ScriptStep>,
        finish_pause: Duration,
        completion: SequenceCompletion,
    ) -> Self {
        Self {
            steps,
            lead_in: Duration::ZERO,
            finish_pause,
            completion,
        }
    }

    pub fn uniform<I>(
        lines: I,
        cadence: Duration,
        finish_pause: Duration,
        completion: SequenceCompletion,
    ) -> Self
    where
        I: IntoIterator<Item = TerminalLine>,
    {
        let steps = lines
            .into_iter()
            .map(|line| ScriptStep {
                line,
                delay: cadence,
            })
            .collect();
        Self::new(steps, finish_pause, completion)
    }

    pub fn with_lead_in(mut self, lead_in: Duration) -> Self {
        self.lead_in = lead_in;
        self
    }

    pub fn steps(&self) -> &[ScriptStep] {
        &self.steps
    }

    pub fn lead_in(&self) -> Duration {
        self.lead_in
    }

    pub fn finish_pause(&self) -> Duration {
        self.finish_pause
    }

    pub fn completion(&self) -> SequenceCompletion {
        self.completion
    }

    pub fn total_duration(&self) -> Duration {
        self.lead_in + self.steps.iter().map(|step| step.delay).sum::<Duration>() + self.finish_pause
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceEvent {
    Line(TerminalLine),
    Finished(SequenceCompletion),
}

/// Generation stamp handed to a running sequence. A runner whose token no
/// longer matches its scheduler's generation is stale and never fires again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceToken(u64);

impl SequenceToken {
    pub fn generation(self) -> u64 {
        self.0
    }
}

#[derive(Debug)]
struct SequenceRunner {
    token: SequenceToken,
    steps: VecDeque<ScriptStep>,
    finish_pause: Duration,
    completion: SequenceCompletion,
    next_due: Instant,
}

impl SequenceRunner {
    fn start(sequence: ScriptedSequence, token: SequenceToken, now: Instant) -> Self {
        let steps: VecDeque<ScriptStep> = sequence.steps.into();
        let first_wait = steps
            .front()
            .map(|step| step.delay)
            .unwrap_or(sequence.finish_pause);
        Self {
            token,
            steps,
            finish_pause: sequence.finish_pause,
            completion: sequence.completion,
            next_due: now + sequence.lead_in + first_wait,
        }
    }

    // Deadlines chain off the previous deadline rather than `now`, so a late
    // resume catches up instead of drifting.
    fn resume(&mut self, now: Instant) -> Option<SequenceEvent> {
        if now < self.next_due {
            return None;
        }
        let Some(step) = self.steps.pop_front() else {
            return Some(SequenceEvent::Finished(self.completion));
        };
        self.next_due += self
            .steps
            .front()
            .map(|next| next.delay)
            .unwrap_or(self.finish_pause);
        Some(SequenceEvent::Line(step.line))
    }
}

#[derive(Debug, Default)]
pub struct SequenceScheduler {
    generation: u64,
    active: Option<SequenceRunner>,
}

impl SequenceScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_token(&self) -> SequenceToken {
        SequenceToken(self.generation)
    }

    pub fn launch(&mut self, sequence: ScriptedSequence, now: Instant) -> SequenceToken {
        self.invalidate();
        let token = self.current_token();
        self.active = Some(SequenceRunner::start(sequence, token, now));
        token
    }

    pub fn invalidate(&mut self) {
        self.generation += 1;
    }

    pub fn cancel(&mut self) {
        self.invalidate();
        self.active = None;
    }

    pub fn is_running(&self) -> bool {
        self.active
            .as_ref()
            .is_some_and(|runner| runner.token == self.current_token())
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.active
            .as_ref()
            .filter(|runner| runner.token == self.current_token())
            .map(|runner| runner.next_due)
    }

    pub fn resume(&mut self, now: Instant) -> Option<SequenceEvent> {
        let current = self.current_token();
        let runner = self.active.as_mut()?;
        if runner.token != current {
            self.active = None;
            return None;
        }
        let event = runner.resume(now)?;
        if matches!(event, SequenceEvent::Finished(_)) {
            self.active = None;
        }
        Some(event)
    }
}
