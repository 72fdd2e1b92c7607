//! End-to-end exercise of the deck session over the public API.
//!
//! No network: decks are installed through the refresh protocol the
//! controller itself uses, and the only controller-driven refresh is
//! for the placeholder mood, which never touches the providers.

use std::collections::HashSet;
use std::sync::Arc;

use muse_rs::{
    available_moods, Card, ContentItem, Decision, DeckBuilder, DeckController, DeckPhase,
    MoodOption, Poem, SessionModel,
};

fn poem_card(title: &str) -> Card {
    Card::new(ContentItem::Poem(Poem {
        title: title.to_string(),
        author: "Anonymous".to_string(),
        lines: vec!["a line".to_string()],
    }))
}

async fn install(model: &SessionModel, mood: MoodOption, cards: Vec<Card>) {
    let generation = model.begin_refresh(mood).await;
    assert!(model.install_deck(generation, cards).await);
}

fn controller(model: &Arc<SessionModel>) -> DeckController {
    DeckController::new(model.clone(), DeckBuilder::new().expect("builder"))
}

#[tokio::test]
async fn fresh_session_starts_idle_and_empty() {
    let model = SessionModel::new();
    assert_eq!(model.phase().await, DeckPhase::IdleEmpty);
    assert!(model.get_deck().await.is_empty());
    assert!(model.get_gallery().await.is_empty());
    assert!(model.selected_mood().await.is_placeholder());
}

#[tokio::test]
async fn selecting_the_placeholder_mood_yields_an_empty_deck_without_error() {
    let model = Arc::new(SessionModel::new());
    let controller = controller(&model);

    let placeholder = available_moods().into_iter().next().unwrap();
    controller.select_mood(placeholder).await;

    assert_eq!(model.phase().await, DeckPhase::IdleEmpty);
    assert!(!model.is_loading().await);
    assert!(!model.has_error().await);
}

#[tokio::test]
async fn swipe_session_consumes_the_deck_front_to_back() {
    let model = Arc::new(SessionModel::new());
    let controller = controller(&model);
    install(
        &model,
        MoodOption::new("Vexed", "storm"),
        vec![poem_card("A"), poem_card("B"), poem_card("C")],
    )
    .await;

    // Save the front card with a committed right swipe
    controller.report_drag(150.0).await;
    controller.resolve_drag().await;

    // Hesitate on the next one, then discard it with a left swipe
    controller.report_drag(-40.0).await;
    controller.resolve_drag().await;
    assert_eq!(model.get_deck().await.len(), 2);
    controller.report_drag(-180.0).await;
    controller.resolve_drag().await;

    // Decide the last card directly
    controller.decide(Decision::Save).await.unwrap();

    assert_eq!(model.phase().await, DeckPhase::IdleEmpty);
    let gallery = model.get_gallery().await;
    let titles: Vec<&str> = gallery.iter().map(|c| c.content.title()).collect();
    assert_eq!(titles, vec!["A", "C"]);
}

#[tokio::test]
async fn decide_without_a_deck_is_rejected() {
    let model = Arc::new(SessionModel::new());
    let controller = controller(&model);
    assert!(controller.decide(Decision::Save).await.is_err());
}

#[tokio::test]
async fn gallery_edits_survive_deck_turnover() {
    let model = Arc::new(SessionModel::new());
    let controller = controller(&model);

    install(
        &model,
        MoodOption::new("Despair", "sorrow"),
        vec![poem_card("A"), poem_card("B")],
    )
    .await;
    controller.decide(Decision::Save).await.unwrap();
    controller.decide(Decision::Save).await.unwrap();

    // A new deck does not disturb the saved collection
    install(
        &model,
        MoodOption::new("Love", "romance"),
        vec![poem_card("D")],
    )
    .await;
    assert_eq!(model.gallery_len().await, 2);

    controller.delete_from_gallery(&HashSet::from([0])).await;
    let gallery = model.get_gallery().await;
    assert_eq!(gallery.len(), 1);
    assert_eq!(gallery[0].content.title(), "B");
}

#[tokio::test]
async fn a_second_mood_selection_supersedes_the_first() {
    let model = SessionModel::new();

    let first = model.begin_refresh(MoodOption::new("Despair", "sorrow")).await;
    let second = model.begin_refresh(MoodOption::new("Vexed", "storm")).await;

    // First refresh resolves after the second started: its result is stale
    assert!(!model.install_deck(first, vec![poem_card("sorrow poem")]).await);
    assert!(model.install_deck(second, vec![poem_card("storm poem")]).await);

    let deck = model.get_deck().await;
    assert_eq!(deck.len(), 1);
    assert_eq!(deck[0].content.title(), "storm poem");
    assert_eq!(model.selected_mood().await.name, "Vexed");
}
