use super::Conversation;
use crate::domain::models::ModelCatalog;
use crate::domain::models::Role;

fn catalog() -> ModelCatalog {
    return ModelCatalog::new(
        vec!["m1".to_string(), "m2".to_string()],
        "m1",
    )
    .unwrap();
}

#[test]
fn it_starts_with_the_system_message_and_default_model() {
    let conversation = Conversation::new(&catalog(), "persona", 10);
    assert_eq!(conversation.messages().len(), 1);
    assert_eq!(conversation.messages()[0].role, Role::System);
    assert_eq!(conversation.messages()[0].content, "persona");
    assert_eq!(conversation.model(), "m1");
}

#[test]
fn it_appends_turns_in_order() {
    let catalog = catalog();
    let mut conversation = Conversation::new(&catalog, "persona", 10);
    conversation.append(Role::User, "hi");
    conversation.append(Role::Assistant, "hello");

    assert_eq!(conversation.messages().len(), 3);
    assert_eq!(conversation.messages()[1].role, Role::User);
    assert_eq!(conversation.messages()[2].role, Role::Assistant);
}

#[test]
fn it_evicts_the_oldest_turns_but_never_the_system_message() {
    let catalog = catalog();
    let mut conversation = Conversation::new(&catalog, "persona", 4);

    for idx in 0..6 {
        conversation.append(Role::User, &format!("u{idx}"));
        conversation.append(Role::Assistant, &format!("a{idx}"));
    }

    assert_eq!(conversation.messages().len(), 5);
    assert_eq!(conversation.messages()[0].role, Role::System);
    assert_eq!(conversation.messages()[1].content, "u4");
    assert_eq!(conversation.messages()[4].content, "a5");
}

#[test]
fn it_may_evict_after_either_append_of_a_turn() {
    let catalog = catalog();
    let mut conversation = Conversation::new(&catalog, "persona", 2);

    conversation.append(Role::User, "u0");
    conversation.append(Role::Assistant, "a0");
    conversation.append(Role::User, "u1");
    assert_eq!(conversation.messages().len(), 3);

    conversation.append(Role::Assistant, "a1");
    assert_eq!(conversation.messages().len(), 3);
    assert_eq!(conversation.messages()[1].content, "u1");

    assert_eq!(conversation.messages()[0].role, Role::System);
}

#[test]
fn it_holds_the_length_invariant_after_every_append() {
    let catalog = catalog();
    let limit = 10;
    let mut conversation = Conversation::new(&catalog, "persona", limit);

    for idx in 0..30 {
        conversation.append(Role::User, &format!("u{idx}"));
        assert!(conversation.messages().len() <= limit + 1);
        assert_eq!(conversation.messages()[0].role, Role::System);

        conversation.append(Role::Assistant, &format!("a{idx}"));
        assert!(conversation.messages().len() <= limit + 1);
        assert_eq!(conversation.messages()[0].role, Role::System);
    }
}

#[test]
fn it_resets_to_a_fresh_conversation() {
    let catalog = catalog();
    let mut conversation = Conversation::new(&catalog, "persona", 10);
    conversation.append(Role::User, "hi");
    conversation.append(Role::Assistant, "hello");
    assert!(conversation.set_model(&catalog, "m2"));

    conversation.reset(&catalog);

    assert_eq!(conversation.messages().len(), 1);
    assert_eq!(conversation.messages()[0].role, Role::System);
    assert_eq!(conversation.messages()[0].content, "persona");
    assert_eq!(conversation.model(), "m1");
}

#[test]
fn it_resets_idempotently() {
    let catalog = catalog();
    let mut conversation = Conversation::new(&catalog, "persona", 10);
    conversation.append(Role::User, "hi");

    conversation.reset(&catalog);
    let after_once = conversation.messages().to_vec();
    let model_after_once = conversation.model().to_string();

    conversation.reset(&catalog);
    assert_eq!(conversation.messages(), after_once.as_slice());
    assert_eq!(conversation.model(), model_after_once);
}

#[test]
fn it_sets_a_model_from_the_catalog() {
    let catalog = catalog();
    let mut conversation = Conversation::new(&catalog, "persona", 10);
    assert!(conversation.set_model(&catalog, "m2"));
    assert_eq!(conversation.model(), "m2");
}

#[test]
fn it_rejects_a_model_outside_the_catalog() {
    let catalog = catalog();
    let mut conversation = Conversation::new(&catalog, "persona", 10);
    assert!(conversation.set_model(&catalog, "m2"));

    assert!(!conversation.set_model(&catalog, "m9"));
    assert_eq!(conversation.model(), "m2");
}
