mod common;

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::KeyCode;

use common::{char_key, key, press, settle, Call, MockApi};
use taskaz::config::Config;
use taskaz::constants::{CONFIRM_DELETE_TASK_LIST, SUCCESS_TASK_LIST_DELETED};
use taskaz::logger::Logger;
use taskaz::ui::core::DialogType;
use taskaz::ui::{AppComponent, Route};

/// Process background actions until a confirmation dialog is showing
async fn wait_for_confirm(app: &mut AppComponent) -> String {
    for _ in 0..400 {
        tokio::time::sleep(Duration::from_millis(5)).await;
        app.process_background_actions();
        if let Some(DialogType::Confirm { prompt, .. }) = &app.dialog().dialog_type {
            return prompt.clone();
        }
    }
    panic!("no confirmation dialog appeared");
}

async fn dashboard_with_one_list(api: &MockApi) -> AppComponent {
    api.add_task_list("Groceries");
    let mut app = AppComponent::new(Arc::new(api.clone()), &Config::default(), Logger::new());
    app.navigate(Route::Dashboard);
    settle(&mut app).await;
    app
}

#[tokio::test]
async fn test_confirm_dialog_yes_deletes() {
    let api = MockApi::new();
    let mut app = dashboard_with_one_list(&api).await;

    press(&mut app, char_key('d'));
    assert_eq!(wait_for_confirm(&mut app).await, CONFIRM_DELETE_TASK_LIST);
    // Nothing is sent while the question is open
    assert!(api.mutations().is_empty());

    press(&mut app, char_key('y'));
    assert!(!app.dialog().is_visible());
    settle(&mut app).await;

    assert_eq!(api.count(|call| matches!(call, Call::DeleteTaskList(_))), 1);
    assert!(app.dashboard().unwrap().state.task_lists.is_empty());
    assert!(app
        .toasts()
        .visible()
        .any(|toast| toast.message == SUCCESS_TASK_LIST_DELETED));
}

#[tokio::test]
async fn test_confirm_dialog_escape_declines() {
    let api = MockApi::new();
    let mut app = dashboard_with_one_list(&api).await;

    press(&mut app, char_key('d'));
    wait_for_confirm(&mut app).await;

    press(&mut app, key(KeyCode::Esc));
    settle(&mut app).await;

    assert!(api.mutations().is_empty());
    assert_eq!(app.dashboard().unwrap().state.task_lists.len(), 1);
}

#[tokio::test]
async fn test_navigating_away_declines_pending_confirm() {
    let api = MockApi::new();
    let mut app = dashboard_with_one_list(&api).await;
    let id = app.dashboard().unwrap().state.task_lists[0].id;

    press(&mut app, char_key('d'));
    wait_for_confirm(&mut app).await;

    app.navigate(Route::TaskList(id));
    assert!(!app.dialog().is_visible());
    settle(&mut app).await;

    assert!(api.mutations().is_empty());
}

#[tokio::test]
async fn test_logs_dialog_opens_and_closes() {
    let api = MockApi::new();
    let mut app = dashboard_with_one_list(&api).await;

    press(&mut app, char_key('G'));
    assert!(matches!(app.dialog().dialog_type, Some(DialogType::Logs)));

    press(&mut app, char_key('G'));
    assert!(!app.dialog().is_visible());
}
