use super::*;

// =============================================================
// Message
// =============================================================

#[test]
fn user_message_is_tagged_user() {
    let msg = Message::user("hello");
    assert_eq!(msg.sender(), Sender::User);
    assert_eq!(msg.text(), "hello");
    assert!(msg.is_user());
}

#[test]
fn bot_message_is_tagged_bot() {
    let msg = Message::bot("hi");
    assert_eq!(msg.sender(), Sender::Bot);
    assert!(!msg.is_user());
}

#[test]
fn sender_serializes_lowercase() {
    let json = serde_json::to_value(Message::bot("x")).unwrap();
    assert_eq!(json["sender"], "bot");
    assert_eq!(Sender::User.to_string(), "user");
}

// =============================================================
// Wire bodies
// =============================================================

#[test]
fn chat_request_body_carries_only_message() {
    let req = ChatRequest { message: "  latte price?".to_owned() };
    let json = serde_json::to_string(&req).unwrap();
    assert_eq!(json, r#"{"message":"  latte price?"}"#);
}

#[test]
fn chat_response_reads_reply() {
    let resp: ChatResponse = serde_json::from_str(r#"{"reply":"Hello!"}"#).unwrap();
    assert_eq!(resp.reply_text(), Some("Hello!"));
}

#[test]
fn chat_response_without_reply_field() {
    let resp: ChatResponse = serde_json::from_str(r#"{"session":"abc"}"#).unwrap();
    assert_eq!(resp.reply, None);
    assert_eq!(resp.reply_text(), None);
}

#[test]
fn chat_response_null_or_empty_reply_is_missing() {
    let null: ChatResponse = serde_json::from_str(r#"{"reply":null}"#).unwrap();
    assert_eq!(null.reply_text(), None);

    let empty: ChatResponse = serde_json::from_str(r#"{"reply":""}"#).unwrap();
    assert_eq!(empty.reply_text(), None);
}
