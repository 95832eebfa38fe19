use super::*;

#[test]
fn push_user_appends_trimmed_message() {
    let mut chat = ChatState::default();
    assert!(chat.push_user("  hello  "));
    assert_eq!(chat.messages.len(), 1);
    assert_eq!(chat.messages[0].text, "hello");
    assert_eq!(chat.messages[0].sender, Sender::User);
}

#[test]
fn push_user_rejects_blank_input() {
    let mut chat = ChatState::default();
    assert!(!chat.push_user("   "));
    assert!(chat.messages.is_empty());
}

#[test]
fn messages_get_unique_ids() {
    let mut chat = ChatState::default();
    chat.push_user("one");
    chat.push_user("two");
    assert_ne!(chat.messages[0].id, chat.messages[1].id);
}

#[test]
fn reset_clears_the_transcript() {
    let mut chat = ChatState::default();
    chat.push_user("one");
    chat.reset();
    assert!(chat.messages.is_empty());
}
