// goal.rs — Goal subcommands: add, list, delete, completed.

use std::io::{self, BufRead, Write};

use pace_store::GoalStore;

/// Add a new goal after presentation-layer validation: empty names and
/// negative targets are rejected here, before the store is touched.
pub fn add(
    store: &mut GoalStore,
    name: &str,
    total: f64,
    weekly: f64,
    unit: &str,
) -> anyhow::Result<()> {
    let name = name.trim();
    if name.is_empty() {
        anyhow::bail!("goal name must not be empty");
    }
    if total < 0.0 || weekly < 0.0 {
        anyhow::bail!("targets must not be negative");
    }

    store.add_goal(name, total, weekly, unit)?;
    println!("Added goal: {} ({} {} total, {} per week)", name, total, unit, weekly);
    Ok(())
}

/// Print the active goal table with this week's numbers.
pub fn list(store: &GoalStore) -> anyhow::Result<()> {
    let goals = store.active_goals();
    if goals.is_empty() {
        println!("No active goals.");
        return Ok(());
    }

    println!(
        "{:<24} {:>8} {:>8} {:>10} {:<8} {}",
        "GOAL", "WEEKLY", "CURRENT", "REMAINING", "UNIT", "STATUS"
    );
    println!("{}", "-".repeat(72));

    for g in goals {
        let current = store.weekly_progress(&g.name);
        let remaining = (g.weekly_target - current).max(0.0);
        let status = if current >= g.weekly_target {
            "on track"
        } else {
            "behind"
        };
        println!(
            "{:<24} {:>8.1} {:>8.1} {:>10.1} {:<8} {}",
            truncate(&g.name, 22),
            g.weekly_target,
            current,
            remaining,
            g.unit,
            status,
        );
    }
    println!("\n{} goal(s) active.", goals.len());

    Ok(())
}

/// Delete every active goal with the given name, confirming first
/// unless `--yes` was passed.
pub fn delete(store: &mut GoalStore, name: &str, yes: bool) -> anyhow::Result<()> {
    if !store.active_goals().iter().any(|g| g.name == name) {
        eprintln!("No active goal named '{}'.", name);
        std::process::exit(1);
    }

    if !yes && !confirm(&format!("Delete goal '{}'?", name))? {
        println!("Cancelled.");
        return Ok(());
    }

    store.delete_goal(name)?;
    println!("Deleted goal: {}", name);
    Ok(())
}

/// Without a name, list all completed goals; with one, print that
/// goal's summary.
pub fn completed(store: &GoalStore, name: Option<&str>) -> anyhow::Result<()> {
    let goals = store.completed_goals();

    let Some(name) = name else {
        if goals.is_empty() {
            println!("No completed goals yet.");
            return Ok(());
        }
        println!(
            "{:<24} {:>10} {:<8} {:<12} {}",
            "GOAL", "TOTAL", "UNIT", "COMPLETED", "DAYS"
        );
        println!("{}", "-".repeat(64));
        for g in goals {
            println!(
                "{:<24} {:>10.1} {:<8} {:<12} {}",
                truncate(&g.goal.name, 22),
                g.total_logged(),
                g.goal.unit,
                g.completion_date,
                g.days_taken(),
            );
        }
        return Ok(());
    };

    match goals.iter().find(|g| g.goal.name == name) {
        Some(g) => {
            println!("Goal:         {}", g.goal.name);
            println!("Total {}:  {:.1}", g.goal.unit, g.total_logged());
            println!("Completed on: {}", g.completion_date);
            println!("Days taken:   {}", g.days_taken());
        }
        None => {
            eprintln!("No completed goal named '{}'.", name);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn confirm(prompt: &str) -> anyhow::Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes"))
}

fn truncate(s: &str, max: usize) -> String {
    if s.len() > max {
        format!("{}...", &s[..max - 3])
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pace_store::FixedClock;
    use tempfile::tempdir;

    fn open_store(path: &std::path::Path) -> GoalStore {
        let today = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        GoalStore::open_with_clock(path, Box::new(FixedClock(today))).unwrap()
    }

    #[test]
    fn add_stores_the_goal() {
        let dir = tempdir().unwrap();
        let mut store = open_store(&dir.path().join("goals.json"));

        add(&mut store, "Read books", 50.0, 5.0, "pages").unwrap();

        assert_eq!(store.active_goals().len(), 1);
        assert_eq!(store.active_goals()[0].name, "Read books");
    }

    #[test]
    fn add_trims_the_name() {
        let dir = tempdir().unwrap();
        let mut store = open_store(&dir.path().join("goals.json"));

        add(&mut store, "  Run  ", 100.0, 10.0, "km").unwrap();

        assert_eq!(store.active_goals()[0].name, "Run");
    }

    #[test]
    fn add_rejects_blank_name() {
        let dir = tempdir().unwrap();
        let mut store = open_store(&dir.path().join("goals.json"));

        assert!(add(&mut store, "   ", 50.0, 5.0, "pages").is_err());
        assert!(store.active_goals().is_empty());
    }

    #[test]
    fn add_rejects_negative_targets() {
        let dir = tempdir().unwrap();
        let mut store = open_store(&dir.path().join("goals.json"));

        assert!(add(&mut store, "Read", -1.0, 5.0, "pages").is_err());
        assert!(add(&mut store, "Read", 50.0, -5.0, "pages").is_err());
        assert!(store.active_goals().is_empty());
    }

    #[test]
    fn delete_with_yes_skips_the_prompt() {
        let dir = tempdir().unwrap();
        let mut store = open_store(&dir.path().join("goals.json"));
        add(&mut store, "Read", 50.0, 5.0, "pages").unwrap();

        delete(&mut store, "Read", true).unwrap();

        assert!(store.active_goals().is_empty());
    }

    #[test]
    fn list_and_completed_render_empty_stores() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir.path().join("goals.json"));
        list(&store).unwrap();
        completed(&store, None).unwrap();
    }

    #[test]
    fn truncate_keeps_short_names() {
        assert_eq!(truncate("Run", 22), "Run");
        assert_eq!(truncate("abcdefghij", 8), "abcde...");
    }
}
