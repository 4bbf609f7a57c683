//! Then steps for task drawer BDD scenarios.

use super::world::DrawerWorld;
use daybook::task::{domain::NewTask, services::SubmitOutcome};
use eyre::WrapErr;
use rstest_bdd_macros::then;

fn emitted_task(world: &DrawerWorld) -> Result<&NewTask, eyre::Report> {
    match world.submit_outcome()? {
        SubmitOutcome::Submitted(task) => Ok(task),
        SubmitOutcome::TitleMissing => Err(eyre::eyre!("expected a task to be emitted")),
    }
}

#[then(r#"the emitted task has title "{title}" in list {list_id:u64} due "{date}""#)]
fn emitted_task_fields(
    world: &DrawerWorld,
    title: String,
    list_id: u64,
    date: String,
) -> Result<(), eyre::Report> {
    let task = emitted_task(world)?;
    if task.title != title {
        return Err(eyre::eyre!("expected title {title:?}, found {:?}", task.title));
    }
    if task.list_id.map(|id| id.value()) != Some(list_id) {
        return Err(eyre::eyre!(
            "expected list {list_id}, found {:?}",
            task.list_id
        ));
    }
    if task.due_date.to_string() != date {
        return Err(eyre::eyre!("expected due date {date}, found {}", task.due_date));
    }
    Ok(())
}

#[then(r#"the emitted subtasks are "{titles}""#)]
fn emitted_subtasks(world: &DrawerWorld, titles: String) -> Result<(), eyre::Report> {
    let task = emitted_task(world)?;
    let expected: Vec<&str> = titles.split(", ").collect();
    let actual: Vec<&str> = task
        .subtasks
        .iter()
        .map(|subtask| subtask.title.as_str())
        .collect();
    if actual != expected {
        return Err(eyre::eyre!("expected subtasks {expected:?}, found {actual:?}"));
    }
    Ok(())
}

#[then("the emitted subtask ids run from zero")]
fn emitted_subtask_ids(world: &DrawerWorld) -> Result<(), eyre::Report> {
    let task = emitted_task(world)?;
    let ids: Vec<usize> = task.subtasks.iter().map(|subtask| subtask.id).collect();
    let expected: Vec<usize> = (0..task.subtasks.len()).collect();
    if ids != expected {
        return Err(eyre::eyre!("expected subtask ids {expected:?}, found {ids:?}"));
    }
    Ok(())
}

#[then("the stored subtasks are all incomplete")]
fn stored_subtasks_incomplete(world: &DrawerWorld) -> Result<(), eyre::Report> {
    let stored = world.store.tasks().wrap_err("read stored tasks")?;
    let task = stored
        .first()
        .ok_or_else(|| eyre::eyre!("expected a stored task"))?;
    if task.subtasks().is_empty() {
        return Err(eyre::eyre!("expected stored subtasks"));
    }
    if task.subtasks().iter().any(|subtask| subtask.completed) {
        return Err(eyre::eyre!("stored subtasks must start incomplete"));
    }
    Ok(())
}

#[then("no task is emitted")]
fn no_task_emitted(world: &DrawerWorld) -> Result<(), eyre::Report> {
    if let Some(Ok(SubmitOutcome::Submitted(task))) = world.last_submit_result.as_ref() {
        return Err(eyre::eyre!("unexpected emitted task {task:?}"));
    }
    let stored = world.store.tasks().wrap_err("read stored tasks")?;
    if !stored.is_empty() {
        return Err(eyre::eyre!("expected empty store, found {} tasks", stored.len()));
    }
    Ok(())
}

#[then("the drawer is closed")]
fn drawer_closed(world: &DrawerWorld) -> Result<(), eyre::Report> {
    let open = world.drawer.as_ref().is_some_and(|drawer| drawer.is_open());
    if open || world.host.close_count() != 1 {
        return Err(eyre::eyre!(
            "expected one close notification, found {}",
            world.host.close_count()
        ));
    }
    Ok(())
}

#[then("the drawer stays open")]
fn drawer_stays_open(world: &DrawerWorld) -> Result<(), eyre::Report> {
    let open = world.drawer.as_ref().is_some_and(|drawer| drawer.is_open());
    if !open || world.host.was_closed() {
        return Err(eyre::eyre!("expected the drawer to remain open"));
    }
    Ok(())
}

#[then("the draft has {count:usize} subtask row")]
fn draft_row_count(world: &mut DrawerWorld, count: usize) -> Result<(), eyre::Report> {
    let rows = world.drawer_mut()?.draft_mut()?.subtasks().len();
    if rows != count {
        return Err(eyre::eyre!("expected {count} subtask rows, found {rows}"));
    }
    Ok(())
}

#[then("the draft duration is {minutes:u32} minutes")]
fn draft_duration(world: &mut DrawerWorld, minutes: u32) -> Result<(), eyre::Report> {
    let duration = world.drawer_mut()?.draft_mut()?.duration();
    if duration.minutes() != minutes {
        return Err(eyre::eyre!("expected {minutes} minutes, found {duration}"));
    }
    Ok(())
}
