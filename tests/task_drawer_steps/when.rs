//! When steps for task drawer BDD scenarios.

use super::world::DrawerWorld;
use daybook::task::domain::DraftField;
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when(r#"the title is set to "{title}""#)]
fn set_title(world: &mut DrawerWorld, title: String) -> Result<(), eyre::Report> {
    world
        .drawer_mut()?
        .draft_mut()?
        .update_field(DraftField::Title, &title);
    Ok(())
}

#[when(r#"the due date is typed as "{date}""#)]
fn type_due_date(world: &mut DrawerWorld, date: String) -> Result<(), eyre::Report> {
    let applied = world
        .drawer_mut()?
        .draft_mut()?
        .set_due_date_from_local_input(&date);
    if !applied {
        return Err(eyre::eyre!("due date input {date:?} was ignored"));
    }
    Ok(())
}

#[when(r#"the "{field}" field is set to "{value}""#)]
fn set_field(world: &mut DrawerWorld, field: String, value: String) -> Result<(), eyre::Report> {
    let draft_field = DraftField::try_from(field.as_str()).wrap_err("parse draft field")?;
    world
        .drawer_mut()?
        .draft_mut()?
        .update_field(draft_field, &value);
    Ok(())
}

#[when(r#"a subtask "{title}" is added"#)]
fn add_subtask(world: &mut DrawerWorld, title: String) -> Result<(), eyre::Report> {
    let draft = world.drawer_mut()?.draft_mut()?;
    if !draft.add_subtask_row() {
        return Err(eyre::eyre!("subtask row could not be added"));
    }
    let last = draft.subtasks().len().saturating_sub(1);
    draft.edit_subtask_title(last, title);
    Ok(())
}

#[when("a blank subtask row is added")]
fn add_blank_row(world: &mut DrawerWorld) -> Result<(), eyre::Report> {
    world.drawer_mut()?.draft_mut()?.add_subtask_row();
    Ok(())
}

#[when(r#"subtask {index:usize} is renamed to "{title}""#)]
fn rename_subtask(world: &mut DrawerWorld, index: usize, title: String) -> Result<(), eyre::Report> {
    world
        .drawer_mut()?
        .draft_mut()?
        .edit_subtask_title(index, title);
    Ok(())
}

#[when("the task is submitted")]
fn submit_task(world: &mut DrawerWorld) -> Result<(), eyre::Report> {
    let result = world.drawer_mut()?.submit();
    world.last_submit_result = Some(result);
    Ok(())
}

#[when("the drawer is cancelled")]
fn cancel_drawer(world: &mut DrawerWorld) -> Result<(), eyre::Report> {
    world.drawer_mut()?.cancel().wrap_err("cancel drawer")
}
