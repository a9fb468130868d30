use super::*;
use animebot_catalog::NoopTranslator;
use animebot_core::{
    catalog::{
        Anime, Broadcast, Character, CharacterRole, Lookup, Recommendation, Season, StreamingLink,
    },
    error::AnimeBotError,
    message::{CallbackQuery, OutgoingMessage},
};
use async_trait::async_trait;
use chrono::Weekday;
use std::sync::Mutex;

/// Channel double that records every outbound call.
#[derive(Default)]
struct RecordingChannel {
    events: Mutex<Vec<String>>,
    sent: Mutex<Vec<OutgoingMessage>>,
    fail_edits: bool,
}

impl RecordingChannel {
    fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl Channel for RecordingChannel {
    fn name(&self) -> &str {
        "test"
    }

    async fn start(&self) -> Result<mpsc::Receiver<IncomingMessage>, AnimeBotError> {
        let (_tx, rx) = mpsc::channel(1);
        Ok(rx)
    }

    async fn send(&self, message: OutgoingMessage) -> Result<(), AnimeBotError> {
        self.events.lock().unwrap().push(format!(
            "send:{}",
            message.reply_target.as_deref().unwrap_or("-")
        ));
        self.sent.lock().unwrap().push(message);
        Ok(())
    }

    async fn edit(&self, message_id: &str, _message: OutgoingMessage) -> Result<(), AnimeBotError> {
        self.events.lock().unwrap().push(format!("edit:{message_id}"));
        if self.fail_edits {
            Err(AnimeBotError::Channel("message is not modified".into()))
        } else {
            Ok(())
        }
    }

    async fn answer_callback(
        &self,
        query_id: &str,
        text: Option<&str>,
    ) -> Result<(), AnimeBotError> {
        self.events
            .lock()
            .unwrap()
            .push(format!("answer:{query_id}:{}", text.unwrap_or("")));
        Ok(())
    }

    async fn send_typing(&self, _target: &str) -> Result<(), AnimeBotError> {
        self.events.lock().unwrap().push("typing".into());
        Ok(())
    }

    async fn stop(&self) -> Result<(), AnimeBotError> {
        Ok(())
    }
}

/// Knows one anime, airing on Fridays; everything else is empty.
struct OneAnimeCatalog;

fn frieren() -> Anime {
    Anime {
        mal_id: 52991,
        title: Some("Sousou no Frieren".into()),
        broadcast: Some(Broadcast {
            day: Some("Fridays".into()),
            time: Some("23:00".into()),
        }),
        ..Default::default()
    }
}

#[async_trait]
impl Catalog for OneAnimeCatalog {
    fn name(&self) -> &str {
        "one"
    }
    async fn search_anime(&self, _query: &str) -> Lookup<Anime> {
        Lookup::Found(frieren())
    }
    async fn anime(&self, _id: u64) -> Lookup<Anime> {
        Lookup::Found(frieren())
    }
    async fn top_anime(&self) -> Lookup<Vec<Anime>> {
        Lookup::Found(vec![frieren()])
    }
    async fn random_anime(&self) -> Lookup<Anime> {
        Lookup::Found(frieren())
    }
    async fn season(&self, _year: u16, _season: Season) -> Lookup<Vec<Anime>> {
        Lookup::NotFound
    }
    async fn schedule(&self, _day: Option<Weekday>) -> Lookup<Vec<Anime>> {
        Lookup::Found(vec![frieren()])
    }
    async fn search_character(&self, _query: &str) -> Lookup<Character> {
        Lookup::NotFound
    }
    async fn anime_characters(&self, _id: u64) -> Lookup<Vec<CharacterRole>> {
        Lookup::NotFound
    }
    async fn recommendations(&self, _id: u64) -> Lookup<Vec<Recommendation>> {
        Lookup::NotFound
    }
    async fn streaming(&self, _id: u64) -> Lookup<Vec<StreamingLink>> {
        Lookup::NotFound
    }
    async fn is_available(&self) -> bool {
        true
    }
}

async fn gateway(channel: Arc<RecordingChannel>) -> (tempfile::TempDir, Gateway) {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::open(dir.path().join("user_data.json")).await.unwrap();
    let mut channels: HashMap<String, Arc<dyn Channel>> = HashMap::new();
    channels.insert("test".into(), channel);
    let gw = Gateway::new(
        channels,
        Arc::new(OneAnimeCatalog),
        Arc::new(NoopTranslator),
        store,
        "fr".into(),
        10,
    );
    (dir, gw)
}

fn message(text: &str) -> IncomingMessage {
    IncomingMessage {
        id: uuid::Uuid::new_v4(),
        channel: "test".into(),
        sender_id: "42".into(),
        sender_name: None,
        text: text.into(),
        timestamp: chrono::Utc::now(),
        reply_target: Some("1000".into()),
        is_group: false,
        callback: None,
    }
}

fn press(data: &str) -> IncomingMessage {
    IncomingMessage {
        callback: Some(CallbackQuery {
            query_id: "q1".into(),
            message_id: Some("77".into()),
        }),
        ..message(data)
    }
}

#[tokio::test]
async fn test_command_sends_card_to_reply_target() {
    let channel = Arc::new(RecordingChannel::default());
    let (_dir, gw) = gateway(channel.clone()).await;

    gw.dispatch(message("/anime frieren")).await;

    assert_eq!(channel.events(), ["typing", "send:1000"]);
    let sent = channel.sent.lock().unwrap();
    assert!(sent[0].text.contains("*Sousou no Frieren*"));
    assert_eq!(sent[0].keyboard.len(), 6);
}

#[tokio::test]
async fn test_plain_text_is_ignored() {
    let channel = Arc::new(RecordingChannel::default());
    let (_dir, gw) = gateway(channel.clone()).await;

    gw.dispatch(message("hello there")).await;
    gw.dispatch(message("/unknown")).await;

    assert!(channel.events().is_empty());
}

#[tokio::test]
async fn test_favorite_press_answers_with_toast_only() {
    let channel = Arc::new(RecordingChannel::default());
    let (_dir, gw) = gateway(channel.clone()).await;

    gw.dispatch(press("fav_52991")).await;
    gw.dispatch(press("fav_52991")).await;

    assert_eq!(
        channel.events(),
        [
            "answer:q1:✅ Ajouté aux favoris !",
            "answer:q1:⚠️ Déjà dans les favoris."
        ]
    );
    let lists = gw.store.lists("42").await.unwrap().unwrap();
    assert_eq!(lists.favorites, ["Sousou no Frieren"]);
}

#[tokio::test]
async fn test_day_press_edits_the_week_message() {
    let channel = Arc::new(RecordingChannel::default());
    let (_dir, gw) = gateway(channel.clone()).await;

    gw.dispatch(press("day_Friday")).await;

    assert_eq!(channel.events(), ["answer:q1:", "edit:77"]);
}

#[tokio::test]
async fn test_failed_edit_falls_back_to_send() {
    let channel = Arc::new(RecordingChannel {
        fail_edits: true,
        ..Default::default()
    });
    let (_dir, gw) = gateway(channel.clone()).await;

    gw.dispatch(press("day_Vendredi")).await;

    assert_eq!(channel.events(), ["answer:q1:", "edit:77", "send:1000"]);
    let sent = channel.sent.lock().unwrap();
    assert!(sent[0].text.contains("Sousou no Frieren"));
}

#[tokio::test]
async fn test_unknown_payload_is_still_answered() {
    let channel = Arc::new(RecordingChannel::default());
    let (_dir, gw) = gateway(channel.clone()).await;

    gw.dispatch(press("bogus_1")).await;

    assert_eq!(channel.events(), ["answer:q1:"]);
}

#[tokio::test]
async fn test_storage_failure_sends_nothing() {
    let channel = Arc::new(RecordingChannel::default());
    let (_dir, gw) = gateway(channel.clone()).await;
    tokio::fs::write(gw.store.path(), b"[broken").await.unwrap();

    gw.dispatch(message("/profil")).await;
    gw.dispatch(press("fav_1_Bleach")).await;

    assert_eq!(channel.events(), ["typing", "answer:q1:"]);
}

#[tokio::test]
async fn test_event_from_unknown_channel_is_dropped() {
    let channel = Arc::new(RecordingChannel::default());
    let (_dir, gw) = gateway(channel.clone()).await;

    let mut stray = message("/top");
    stray.channel = "whatsapp".into();
    gw.dispatch(stray).await;

    assert!(channel.events().is_empty());
}
