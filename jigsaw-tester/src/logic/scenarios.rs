//! Scripted play-throughs with their pass criteria.
use jigsaw_game::{GameAction, ImageStatus, Screen, constants::CUSTOM_LEVEL_ID, star_rating};

use crate::logic::policy::PlayStrategy;
use crate::logic::simulation::Harness;

/// Everything one scenario iteration needs.
pub struct ScenarioCtx {
    pub seed: u64,
    pub strategy: PlayStrategy,
    pub verbose: bool,
}

impl ScenarioCtx {
    fn harness(&self) -> Harness {
        Harness::new(self.seed, self.verbose)
    }
}

type ScenarioFn = fn(&ScenarioCtx) -> Result<(), String>;

pub struct TestScenario {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    run: ScenarioFn,
}

impl TestScenario {
    /// # Errors
    /// The first violated expectation, as a readable message.
    pub fn run(&self, ctx: &ScenarioCtx) -> Result<(), String> {
        (self.run)(ctx)
    }
}

const SCENARIOS: &[TestScenario] = &[
    TestScenario {
        key: "smoke",
        name: "Smoke",
        description: "Open level 1, solve it, check the summary",
        run: smoke,
    },
    TestScenario {
        key: "campaign",
        name: "Full Campaign",
        description: "Play all ten levels through Next Level and check unlock order",
        run: campaign,
    },
    TestScenario {
        key: "stale-completion",
        name: "Stale Completion",
        description: "Exit before the reveal timer fires; the late timer must be ignored",
        run: stale_completion,
    },
    TestScenario {
        key: "reset-midway",
        name: "Reset Midway",
        description: "Reset a half-solved board and solve the fresh one",
        run: reset_midway,
    },
    TestScenario {
        key: "locked-level",
        name: "Locked Level",
        description: "Selecting a locked level raises a notice and stays on the list",
        run: locked_level,
    },
    TestScenario {
        key: "custom-level",
        name: "Custom Level",
        description: "An uploaded image plays a 3x3 board without touching progression",
        run: custom_level,
    },
    TestScenario {
        key: "zoom-bounds",
        name: "Zoom Bounds",
        description: "Zoom steps clamp at 50% and 200%",
        run: zoom_bounds,
    },
];

#[must_use]
pub fn get_scenario(key: &str) -> Option<&'static TestScenario> {
    SCENARIOS.iter().find(|s| s.key == key)
}

#[must_use]
pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    SCENARIOS.iter().map(|s| (s.key, s.description)).collect()
}

#[must_use]
pub fn all_keys() -> Vec<String> {
    SCENARIOS.iter().map(|s| s.key.to_string()).collect()
}

fn ensure(cond: bool, msg: impl FnOnce() -> String) -> Result<(), String> {
    if cond { Ok(()) } else { Err(msg()) }
}

fn check_completed_level(harness: &Harness, level_id: u32) -> Result<(), String> {
    ensure(harness.state.screen == Screen::Completed, || {
        format!("level {level_id} ended on {:?}", harness.state.screen)
    })?;
    let run = harness
        .last_run()
        .ok_or_else(|| format!("level {level_id} has no summary"))?;
    ensure(run.level_id == level_id, || {
        format!("summary for level {} instead of {level_id}", run.level_id)
    })?;
    let pieces = run.grid_size * run.grid_size;
    ensure(run.moves == pieces + run.misses, || {
        format!("{} moves for {pieces} pieces and {} misses", run.moves, run.misses)
    })?;
    ensure(run.stars == star_rating(run.misses, run.grid_size), || {
        format!("{} stars for {} misses", run.stars, run.misses)
    })?;
    ensure((harness.state.progress - 100.0).abs() < f64::EPSILON, || {
        format!("finished at {}%", harness.state.progress)
    })
}

fn smoke(ctx: &ScenarioCtx) -> Result<(), String> {
    let mut harness = ctx.harness();
    harness.dispatch(GameAction::TutorialClose);
    harness.dispatch(GameAction::SelectLevel { level_id: 1 });
    let mut policy = ctx.strategy.create_policy(ctx.seed);
    harness.solve_active_level(policy.as_mut())?;
    check_completed_level(&harness, 1)?;
    ensure(!harness.state.catalog.get(2).is_some_and(|l| l.is_locked), || {
        "level 2 still locked after level 1".to_string()
    })
}

fn campaign(ctx: &ScenarioCtx) -> Result<(), String> {
    let mut harness = ctx.harness();
    let mut policy = ctx.strategy.create_policy(ctx.seed);
    let ids: Vec<u32> = harness.state.catalog.levels().iter().map(|l| l.id).collect();
    harness.dispatch(GameAction::SelectLevel { level_id: ids[0] });

    for (idx, &id) in ids.iter().enumerate() {
        ensure(harness.state.current_level_id() == Some(id), || {
            format!("expected level {id}, got {:?}", harness.state.current_level_id())
        })?;
        harness.solve_active_level(policy.as_mut())?;
        check_completed_level(&harness, id)?;
        if let Some(early) = harness.state.catalog.levels()[idx + 1..]
            .iter()
            .skip(1)
            .find(|l| !l.is_locked)
        {
            return Err(format!("level {} unlocked after only {id}", early.id));
        }
        harness.dispatch(GameAction::NextLevel);
    }

    ensure(harness.state.screen == Screen::LevelSelect, || {
        "campaign did not return to the level list".to_string()
    })?;
    ensure(harness.state.catalog.completed_count() == ids.len(), || {
        format!("{} of {} levels completed", harness.state.catalog.completed_count(), ids.len())
    })
}

fn stale_completion(ctx: &ScenarioCtx) -> Result<(), String> {
    let mut harness = ctx.harness();
    harness.auto_fire = false;
    harness.dispatch(GameAction::SelectLevel { level_id: 1 });
    let mut policy = ctx.strategy.create_policy(ctx.seed);
    harness.solve_active_level(policy.as_mut())?;
    ensure(harness.pending_timers.len() == 1, || {
        format!("{} timers pending", harness.pending_timers.len())
    })?;

    let stale = harness.pending_timers.clone();
    harness.dispatch(GameAction::Exit);
    ensure(harness.cancelled_timers == 1, || "exit did not cancel the timer".to_string())?;
    for ticket in stale {
        harness.dispatch(GameAction::CompletionElapsed { ticket });
    }
    ensure(harness.state.screen == Screen::LevelSelect, || {
        format!("late timer moved the screen to {:?}", harness.state.screen)
    })?;
    ensure(harness.state.summary.is_none(), || "late timer wrote a summary".to_string())?;
    ensure(!harness.released_images.is_empty(), || "exit kept the image".to_string())?;

    harness.dispatch(GameAction::SelectLevel { level_id: 1 });
    harness.solve_active_level(policy.as_mut())?;
    harness.fire_pending_timers();
    check_completed_level(&harness, 1)
}

fn reset_midway(ctx: &ScenarioCtx) -> Result<(), String> {
    let mut harness = ctx.harness();
    harness.dispatch(GameAction::SelectLevel { level_id: 1 });
    let mut policy = ctx.strategy.create_policy(ctx.seed);
    for _ in 0..4 {
        harness.step(policy.as_mut());
    }
    let image_before = harness.state.image.clone();
    harness.dispatch(GameAction::Reset);

    let board = harness
        .state
        .board
        .as_ref()
        .ok_or_else(|| "reset dropped the board".to_string())?;
    ensure(board.placed_count() == 0, || {
        format!("{} pieces survived reset", board.placed_count())
    })?;
    ensure(harness.state.progress.abs() < f64::EPSILON, || "progress survived reset".to_string())?;
    ensure(harness.state.moves == 0 && harness.state.misses == 0, || {
        "counters survived reset".to_string()
    })?;
    ensure(harness.state.image == image_before, || "reset reloaded the image".to_string())?;

    harness.solve_active_level(policy.as_mut())?;
    check_completed_level(&harness, 1)
}

fn locked_level(ctx: &ScenarioCtx) -> Result<(), String> {
    let mut harness = ctx.harness();
    let locked = harness
        .state
        .catalog
        .levels()
        .iter()
        .find(|l| l.is_locked)
        .map(|l| l.id)
        .ok_or_else(|| "catalog has no locked level".to_string())?;
    harness.dispatch(GameAction::SelectLevel { level_id: locked });
    ensure(harness.state.screen == Screen::LevelSelect, || {
        format!("locked level {locked} opened")
    })?;
    let notice = harness
        .state
        .notice
        .as_ref()
        .ok_or_else(|| "no notice for a locked level".to_string())?;
    ensure(notice.key == "notice.level_locked", || format!("unexpected notice {}", notice.key))?;
    harness.dispatch(GameAction::DismissNotice);
    ensure(harness.state.notice.is_none(), || "notice survived dismiss".to_string())
}

fn custom_level(ctx: &ScenarioCtx) -> Result<(), String> {
    let mut harness = ctx.harness();
    harness.dispatch(GameAction::StartCustomLevel {
        image_url: String::from("blob:upload"),
    });
    ensure(harness.state.current_level_id() == Some(CUSTOM_LEVEL_ID), || {
        "upload did not start the custom level".to_string()
    })?;
    ensure(
        harness.state.image == ImageStatus::Ready(String::from("blob:upload")),
        || "upload image not shown".to_string(),
    )?;
    let mut policy = ctx.strategy.create_policy(ctx.seed);
    harness.solve_active_level(policy.as_mut())?;
    check_completed_level(&harness, CUSTOM_LEVEL_ID)?;
    ensure(harness.state.catalog.completed_count() == 0, || {
        "custom level touched progression".to_string()
    })
}

fn zoom_bounds(ctx: &ScenarioCtx) -> Result<(), String> {
    let mut harness = ctx.harness();
    for _ in 0..30 {
        harness.dispatch(GameAction::ZoomIn);
    }
    ensure(harness.state.zoom.percent() == 200, || {
        format!("zoom in stopped at {}", harness.state.zoom.percent())
    })?;
    for _ in 0..30 {
        harness.dispatch(GameAction::ZoomOut);
    }
    ensure(harness.state.zoom.percent() == 50, || {
        format!("zoom out stopped at {}", harness.state.zoom.percent())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_scenario_passes_for_every_strategy() {
        for strategy in [PlayStrategy::Ordered, PlayStrategy::Shuffled, PlayStrategy::Clumsy] {
            for scenario in SCENARIOS {
                let ctx = ScenarioCtx {
                    seed: 1337,
                    strategy,
                    verbose: false,
                };
                if let Err(err) = scenario.run(&ctx) {
                    panic!("{} with {strategy}: {err}", scenario.key);
                }
            }
        }
    }

    #[test]
    fn scenario_keys_are_unique() {
        let keys = all_keys();
        let mut sorted = keys.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(keys.len(), sorted.len());
        assert!(get_scenario("smoke").is_some());
        assert!(get_scenario("nope").is_none());
    }
}
