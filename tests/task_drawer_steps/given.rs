//! Given steps for task drawer BDD scenarios.

use std::sync::Arc;

use super::world::DrawerWorld;
use daybook::task::{
    domain::{DueDate, ListId, TaskList},
    services::{OpenDrawerRequest, TaskDrawerService},
};
use eyre::WrapErr;
use mockable::DefaultClock;
use rstest_bdd_macros::given;

#[given(r#"a task store offering the list {id:u64} "{name}""#)]
fn store_with_list(world: &mut DrawerWorld, id: u64, name: String) -> Result<(), eyre::Report> {
    world
        .store
        .set_lists([TaskList::new(ListId::new(id), name)])
        .wrap_err("seed task lists")
}

#[given(r#"a drawer opened for "{date}""#)]
fn drawer_opened_for(world: &mut DrawerWorld, date: String) -> Result<(), eyre::Report> {
    let due_date = DueDate::parse_local_input(&date).wrap_err("parse initial due date")?;
    let service = TaskDrawerService::new(
        Arc::clone(&world.store),
        Arc::clone(&world.host),
        Arc::new(DefaultClock),
    );
    let drawer = service
        .open(OpenDrawerRequest::new().with_initial_due_date(due_date))
        .wrap_err("open task drawer")?;
    world.drawer = Some(drawer);
    Ok(())
}
