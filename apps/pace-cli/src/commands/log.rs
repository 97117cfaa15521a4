// log.rs — Progress subcommands: log, miss, weekly.

use pace_store::GoalStore;

/// Log today's progress against a goal.
///
/// The store accepts any finite amount; the sign policy lives here in
/// the presentation layer, so negative entries are refused before the
/// core is called.
pub fn log_progress(store: &mut GoalStore, name: &str, amount: f64) -> anyhow::Result<()> {
    if !amount.is_finite() || amount < 0.0 {
        anyhow::bail!("progress must be a non-negative number");
    }

    let active_before = matching_active(store, name);
    if !store.log_progress(name, amount)? {
        eprintln!("No active goal named '{}'.", name);
        std::process::exit(1);
    }

    // One fewer active match means the entry pushed the goal over its
    // total target.
    if matching_active(store, name) < active_before {
        println!("Goal '{}' completed!", name);
    } else {
        println!("Logged {} against '{}'.", amount, name);
    }
    Ok(())
}

/// Record a missed day with the user's reason.
pub fn miss(store: &mut GoalStore, name: &str, reason: &str) -> anyhow::Result<()> {
    if !store.log_missed_day(name, reason)? {
        eprintln!("No active goal named '{}'.", name);
        std::process::exit(1);
    }
    println!("Missed day recorded for '{}'.", name);
    Ok(())
}

/// Print this week's progress against the weekly target.
pub fn weekly(store: &GoalStore, name: &str) -> anyhow::Result<()> {
    let Some(goal) = store.active_goals().iter().find(|g| g.name == name) else {
        eprintln!("No active goal named '{}'.", name);
        std::process::exit(1);
    };

    let current = store.weekly_progress(name);
    println!(
        "{:.1} / {:.1} {} this week",
        current, goal.weekly_target, goal.unit
    );
    Ok(())
}

fn matching_active(store: &GoalStore, name: &str) -> usize {
    store
        .active_goals()
        .iter()
        .filter(|g| g.name == name)
        .count()
}
