/// Chat (group or private) identity. Replies are addressed by `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}
