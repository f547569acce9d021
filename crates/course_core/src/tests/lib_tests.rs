use super::*;

fn seeded_store() -> CourseStore {
    let mut store = CourseStore::new();
    assert!(store.seed_if_empty());
    store
}

fn fill_form(store: &mut CourseStore, id: &str, name: &str, description: &str) {
    store.set_id_field(id);
    store.set_name_field(name);
    store.set_description_field(description);
}

#[test]
fn starts_in_adding_mode_with_blank_form() {
    let store = CourseStore::new();
    assert_eq!(store.mode(), FormMode::Adding);
    assert!(store.form().is_blank());
    assert_eq!(store.submit_label(), "Add");
}

#[test]
fn valid_add_appends_trimmed_course_and_resets_form() {
    let mut store = seeded_store();
    fill_form(&mut store, "42", "  Databases  ", "  joins and indexes ");

    let outcome = store.save().expect("save");

    assert_eq!(outcome, SaveOutcome::Added { position: 5 });
    assert_eq!(store.len(), 6);
    assert_eq!(
        store.courses().last(),
        Some(&Course::new(CourseId(42), "Databases", "joins and indexes"))
    );
    assert!(store.form().is_blank());
    assert_eq!(store.mode(), FormMode::Adding);
}

#[test]
fn non_numeric_id_is_rejected_without_mutation() {
    let mut store = seeded_store();
    fill_form(&mut store, "abc", "X", "");

    assert_eq!(store.save(), Err(ValidationError::NonNumericId));
    assert_eq!(store.len(), SEED_COURSE_COUNT);
}

#[test]
fn id_parsing_accepts_sign_but_not_padding() {
    let mut store = CourseStore::new();
    fill_form(&mut store, "-3", "Negative", "");
    assert!(store.save().is_ok());

    fill_form(&mut store, " 4", "Padded", "");
    assert_eq!(store.save(), Err(ValidationError::NonNumericId));

    fill_form(&mut store, "99999999999", "Overflow", "");
    assert_eq!(store.save(), Err(ValidationError::NonNumericId));
}

#[test]
fn blank_name_is_rejected_without_mutation() {
    let mut store = seeded_store();
    fill_form(&mut store, "10", "   ", "");

    assert_eq!(store.save(), Err(ValidationError::EmptyName));
    assert_eq!(store.len(), SEED_COURSE_COUNT);
}

#[test]
fn id_is_checked_before_name() {
    let mut store = CourseStore::new();
    fill_form(&mut store, "", "", "");
    assert_eq!(store.save(), Err(ValidationError::NonNumericId));
}

#[test]
fn duplicate_id_is_rejected_in_add_mode() {
    let mut store = seeded_store();
    fill_form(&mut store, "1", "Y", "");

    assert_eq!(store.save(), Err(ValidationError::DuplicateId(CourseId(1))));
    assert_eq!(store.len(), SEED_COURSE_COUNT);
    assert_eq!(store.courses()[0].name, "Name 1");
}

#[test]
fn failed_save_keeps_user_text() {
    let mut store = seeded_store();
    fill_form(&mut store, "2", "Repeat", "kept");

    assert!(store.save().is_err());

    assert_eq!(store.form().id, "2");
    assert_eq!(store.form().name, "Repeat");
    assert_eq!(store.form().description, "kept");
}

#[test]
fn save_with_reports_message_through_callback() {
    let mut store = CourseStore::new();
    fill_form(&mut store, "x", "Name", "");

    let mut reported = None;
    let outcome = store.save_with(|message| reported = Some(message));

    assert_eq!(outcome, None);
    assert_eq!(reported.as_deref(), Some("id must be numeric"));
}

#[test]
fn save_with_skips_callback_on_success() {
    let mut store = CourseStore::new();
    fill_form(&mut store, "1", "Name", "");

    let mut called = false;
    let outcome = store.save_with(|_| called = true);

    assert_eq!(outcome, Some(SaveOutcome::Added { position: 0 }));
    assert!(!called);
}

#[test]
fn begin_edit_copies_record_into_form() {
    let mut store = seeded_store();
    store.begin_edit(2).expect("edit");

    assert_eq!(store.form().id, "3");
    assert_eq!(store.form().name, "Name 3");
    assert_eq!(store.form().description, "Description 3");
    assert_eq!(store.mode(), FormMode::Editing(2));
    assert_eq!(store.submit_label(), "Save changes");
}

#[test]
fn begin_edit_out_of_range_is_an_error() {
    let mut store = seeded_store();
    assert_eq!(
        store.begin_edit(5),
        Err(StoreError::PositionOutOfRange { position: 5, len: 5 })
    );
    assert_eq!(store.mode(), FormMode::Adding);
}

#[test]
fn edit_save_replaces_only_that_record() {
    let mut store = seeded_store();
    let before = store.courses().to_vec();
    store.begin_edit(1).expect("edit");
    store.set_name_field("Renamed");

    let outcome = store.save().expect("save");

    assert_eq!(outcome, SaveOutcome::Updated { position: 1 });
    assert_eq!(store.courses()[1], Course::new(CourseId(2), "Renamed", "Description 2"));
    for (index, course) in store.courses().iter().enumerate() {
        if index != 1 {
            assert_eq!(course, &before[index]);
        }
    }
    assert_eq!(store.mode(), FormMode::Adding);
}

#[test]
fn edit_save_may_collide_with_another_id() {
    let mut store = seeded_store();
    store.begin_edit(4).expect("edit");
    store.set_id_field("1");

    store.save().expect("edit save is not re-checked");

    let ones = store
        .courses()
        .iter()
        .filter(|course| course.id == CourseId(1))
        .count();
    assert_eq!(ones, 2);
}

#[test]
fn edit_save_still_validates_fields() {
    let mut store = seeded_store();
    store.begin_edit(0).expect("edit");
    store.set_name_field("  ");

    assert_eq!(store.save(), Err(ValidationError::EmptyName));
    assert_eq!(store.mode(), FormMode::Editing(0));
}

#[test]
fn deleting_earlier_row_shifts_edit_cursor() {
    let mut store = seeded_store();
    store.begin_edit(3).expect("edit");
    let edited_id = store.courses()[3].id;

    store.delete_at(1).expect("delete");

    assert_eq!(store.edit_index(), Some(2));
    assert_eq!(store.courses()[2].id, edited_id);
    assert_eq!(store.form().id, edited_id.to_string());
}

#[test]
fn deleting_edited_row_resets_form() {
    let mut store = seeded_store();
    store.begin_edit(2).expect("edit");

    let removed = store.delete_at(2).expect("delete");

    assert_eq!(removed.id, CourseId(3));
    assert_eq!(store.mode(), FormMode::Adding);
    assert!(store.form().is_blank());
}

#[test]
fn deleting_later_row_keeps_edit_cursor() {
    let mut store = seeded_store();
    store.begin_edit(1).expect("edit");

    store.delete_at(4).expect("delete");

    assert_eq!(store.edit_index(), Some(1));
    assert_eq!(store.form().name, "Name 2");
}

#[test]
fn deleting_in_adding_mode_leaves_form_alone() {
    let mut store = seeded_store();
    store.set_name_field("draft");

    store.delete_at(0).expect("delete");

    assert_eq!(store.mode(), FormMode::Adding);
    assert_eq!(store.form().name, "draft");
    assert_eq!(store.len(), 4);
}

#[test]
fn delete_out_of_range_is_an_error() {
    let mut store = CourseStore::new();
    assert_eq!(
        store.delete_at(0),
        Err(StoreError::PositionOutOfRange { position: 0, len: 0 })
    );
}

#[test]
fn reset_form_returns_to_adding() {
    let mut store = seeded_store();
    store.begin_edit(0).expect("edit");

    store.reset_form();

    assert_eq!(store.mode(), FormMode::Adding);
    assert!(store.form().is_blank());
    assert_eq!(store.len(), SEED_COURSE_COUNT);
}

#[test]
fn seed_if_empty_is_idempotent() {
    let mut store = CourseStore::new();
    assert!(store.seed_if_empty());
    assert!(!store.seed_if_empty());

    assert_eq!(store.len(), SEED_COURSE_COUNT);
    let ids: Vec<i32> = store.courses().iter().map(|course| course.id.0).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    assert_eq!(store.courses()[4].name, "Name 5");
    assert_eq!(store.courses()[4].description, "Description 5");
}

#[test]
fn seed_if_empty_skips_populated_store() {
    let mut store = CourseStore::with_courses(vec![Course::new(CourseId(9), "Only", "")]);
    assert!(!store.seed_if_empty());
    assert_eq!(store.len(), 1);
}

#[test]
fn subscribers_see_mutations_in_order() {
    let mut store = CourseStore::new();
    let events = store.subscribe();

    store.seed_if_empty();
    store.begin_edit(0).expect("edit");
    store.delete_at(0).expect("delete");

    let received: Vec<_> = events.try_iter().collect();
    assert_eq!(
        received,
        vec![
            StoreEvent::Seeded { count: 5 },
            StoreEvent::EditStarted { position: 0 },
            StoreEvent::CourseDeleted {
                position: 0,
                id: CourseId(1)
            },
            StoreEvent::FormReset,
        ]
    );
}

#[test]
fn rejected_save_emits_nothing() {
    let mut store = seeded_store();
    store.set_id_field("1");
    let events = store.subscribe();

    assert!(store.save().is_err());

    assert!(events.try_recv().is_err());
}

#[test]
fn successful_add_emits_added_then_reset() {
    let mut store = CourseStore::new();
    fill_form(&mut store, "7", "Seven", "");
    let events = store.subscribe();

    store.save().expect("save");

    let received: Vec<_> = events.try_iter().collect();
    assert_eq!(
        received,
        vec![StoreEvent::CourseAdded { position: 0 }, StoreEvent::FormReset]
    );
}
