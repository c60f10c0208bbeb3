//! Unit tests for qs-process.

use qs_core::{ProcessId, ResourceId, SimTime};

use crate::{
    Await, Command, MetricsRecord, Process, ProcessContext, ProcessResult, ProcessState, Step,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Requests a resource, holds it for `minutes`, releases it.
struct Occupy {
    resource: ResourceId,
    minutes:  f64,
    stage:    u8,
}

impl Process for Occupy {
    fn name(&self) -> &'static str {
        "occupy"
    }

    fn resume(&mut self, ctx: &mut ProcessContext) -> ProcessResult<Step> {
        self.stage += 1;
        Ok(match self.stage {
            1 => Step::request(self.resource),
            2 => Step::timeout(self.minutes),
            _ => {
                ctx.release(self.resource);
                Step::Complete
            }
        })
    }
}

#[cfg(test)]
mod step_tests {
    use super::*;

    #[test]
    fn shorthands() {
        assert_eq!(Step::timeout(0.3), Step::Await(Await::Timeout(0.3)));
        assert_eq!(Step::request(ResourceId(1)), Step::Await(Await::Grant(ResourceId(1))));
    }

    #[test]
    fn state_after_step() {
        assert_eq!(
            ProcessState::after(Step::timeout(1.0)),
            ProcessState::Suspended(Await::Timeout(1.0))
        );
        assert!(ProcessState::after(Step::Complete).is_completed());
        assert!(!ProcessState::Runnable.is_completed());
    }
}

#[cfg(test)]
mod context_tests {
    use super::*;

    #[test]
    fn commands_preserve_issue_order() {
        let mut ctx = ProcessContext::new(SimTime::new(2.0), ProcessId(4));
        assert_eq!(ctx.now(), SimTime::new(2.0));
        assert_eq!(ctx.process(), ProcessId(4));

        ctx.release(ResourceId(0));
        ctx.spawn(Occupy { resource: ResourceId(0), minutes: 1.0, stage: 0 });
        ctx.record(MetricsRecord::new(0, 1.0, SimTime::ZERO, SimTime::ZERO, 0.3));

        let cmds = ctx.into_commands();
        assert_eq!(cmds.len(), 3);
        assert!(matches!(cmds[0], Command::Release(ResourceId(0))));
        assert!(matches!(&cmds[1], Command::Spawn(p) if p.name() == "occupy"));
        assert!(matches!(cmds[2], Command::Record(_)));
    }

    #[test]
    fn command_debug_names_spawned_process() {
        let mut ctx = ProcessContext::new(SimTime::ZERO, ProcessId(0));
        ctx.spawn(Occupy { resource: ResourceId(0), minutes: 1.0, stage: 0 });
        assert_eq!(format!("{:?}", ctx.commands()[0]), "Spawn(\"occupy\")");
    }
}

#[cfg(test)]
mod process_tests {
    use super::*;

    #[test]
    fn state_machine_walks_through_suspension_points() {
        let mut p = Occupy { resource: ResourceId(2), minutes: 0.6, stage: 0 };
        let mut ctx = ProcessContext::new(SimTime::ZERO, ProcessId(0));
        assert_eq!(p.resume(&mut ctx).unwrap(), Step::request(ResourceId(2)));
        assert_eq!(p.resume(&mut ctx).unwrap(), Step::timeout(0.6));
        assert!(ctx.commands().is_empty());
        assert_eq!(p.resume(&mut ctx).unwrap(), Step::Complete);
        assert!(matches!(ctx.commands(), [Command::Release(ResourceId(2))]));
    }
}

#[cfg(test)]
mod metrics_tests {
    use super::*;

    #[test]
    fn total_is_wait_plus_service() {
        let r = MetricsRecord::new(3, 2.0, SimTime::new(1.0), SimTime::new(1.7), 0.6);
        assert!((r.wait_time - 0.7).abs() < 1e-12);
        assert_eq!(r.service_time, 0.6);
        assert_eq!(r.total_time, r.wait_time + r.service_time);
        assert_eq!(r.arrival_index, 3);
        assert!((r.departure_time().minutes() - 2.3).abs() < 1e-12);
    }

    #[test]
    fn immediate_service_has_zero_wait() {
        let r = MetricsRecord::new(0, 1.0, SimTime::new(5.0), SimTime::new(5.0), 0.3);
        assert_eq!(r.wait_time, 0.0);
        assert_eq!(r.total_time, 0.3);
    }
}
