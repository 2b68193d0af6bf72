//! Integration tests for DesktopEngine
//!
//! These tests drive the engine the way the page does:
//! - Icon activation, single-instance reuse and z-order
//! - Drag gestures and additive moves
//! - Keyboard routing to the active window
//! - Gateway requests executed against `MemoryGateway`
//! - Background persistence and reset

use studio_desktop::media::{FontInput, ImageInput, MediaEffect, VideoInput};
use studio_desktop::views::{AdminInput, PortfolioInput};
use studio_desktop::{
    ActiveSurface, Background, ContentView, DesktopCommand, DesktopConfig, DesktopEngine,
    DesktopError, Effect, LocalStore, MemoryLocalStore, RequestOutcome, Vec2, ViewInput,
    WindowId, WindowKind, BACKGROUND_STORAGE_KEY, DEFAULT_GRADIENT,
};
use studio_gateway::{MemoryGateway, Operation, UploadFile, User};

fn activate(engine: &mut DesktopEngine, icon: &str) -> WindowId {
    engine
        .execute(DesktopCommand::ActivateIcon { icon_id: icon.into() })
        .unwrap();
    engine.windows.focused().unwrap()
}

fn portfolio(engine: &mut DesktopEngine, input: PortfolioInput, window: WindowId) -> Vec<Effect> {
    engine
        .handle_view_input(window, ViewInput::Portfolio(input))
        .unwrap()
}

fn admin() -> User {
    User::new("u-admin", "admin@studio64.com")
}

// =============================================================================
// Window Lifecycle Tests
// =============================================================================

#[test]
fn test_reopen_refocuses_existing_window() {
    let mut engine = DesktopEngine::new();
    let a = activate(&mut engine, "1");
    let b = activate(&mut engine, "2");
    let again = activate(&mut engine, "1");

    assert_eq!(again, a);
    assert_eq!(engine.windows.count(), 2);
    assert_eq!(engine.windows.focused(), Some(a));
    let order: Vec<WindowId> = engine.windows.windows().iter().map(|w| w.id).collect();
    assert_eq!(order, vec![b, a]);
}

#[test]
fn test_focus_always_names_open_window() {
    let mut engine = DesktopEngine::new();
    let a = activate(&mut engine, "1");
    let b = activate(&mut engine, "3");
    let c = activate(&mut engine, "4");

    engine.execute(DesktopCommand::FocusWindow { window_id: a }).unwrap();
    engine.execute(DesktopCommand::CloseWindow { window_id: b }).unwrap();
    assert_eq!(engine.windows.focused(), Some(a));

    engine.execute(DesktopCommand::CloseWindow { window_id: a }).unwrap();
    assert_eq!(engine.windows.focused(), None);
    assert_eq!(engine.windows.count(), 1);
    assert!(engine.windows.get(c).is_some());
}

#[test]
fn test_moves_are_additive() {
    let mut engine = DesktopEngine::new();
    let a = activate(&mut engine, "1");

    engine.begin_drag(a, Vec2::new(200.0, 200.0)).unwrap();
    engine.drag_to(Vec2::new(250.0, 210.0));
    engine.end_drag(Vec2::new(260.0, 220.0));

    engine
        .execute(DesktopCommand::MoveWindow { window_id: a, dx: -10.0, dy: 5.0 })
        .unwrap();

    let p = engine.windows.get(a).unwrap().position;
    assert!((p.x - 150.0).abs() < 0.001);
    assert!((p.y - 125.0).abs() < 0.001);
}

#[test]
fn test_clamping_is_opt_in() {
    let config = DesktopConfig::from_json(r#"{"clampToViewport": true}"#).unwrap();
    let mut engine = DesktopEngine::with_store(config, Box::new(MemoryLocalStore::new()));
    engine.resize(1280.0, 720.0);
    let a = activate(&mut engine, "1");

    engine.move_window_by(a, Vec2::new(5000.0, -5000.0)).unwrap();
    let p = engine.windows.get(a).unwrap().position;
    assert!((p.x - 680.0).abs() < 0.001);
    assert!((p.y - 0.0).abs() < 0.001);
}

#[test]
fn test_admin_panel_gated_on_allow_list() {
    let mut engine = DesktopEngine::new();
    engine.set_user(Some(User::new("u-2", "visitor@example.com")));
    assert_eq!(
        engine.execute(DesktopCommand::OpenAdminPanel).unwrap_err(),
        DesktopError::AdminRequired
    );
    assert!(!engine.snapshot().toolbar.menu_enabled);

    engine.set_user(Some(admin()));
    engine.execute(DesktopCommand::OpenAdminPanel).unwrap();
    let id = engine.windows.focused().unwrap();
    assert_eq!(engine.windows.get(id).unwrap().kind, WindowKind::Admin);
}

// =============================================================================
// Keyboard Routing Tests
// =============================================================================

#[test]
fn test_shortcuts_only_reach_active_window() {
    let mut engine = DesktopEngine::new();
    let photos = activate(&mut engine, "1");
    portfolio(
        &mut engine,
        PortfolioInput::OpenFolder { folder_id: "photos".into() },
        photos,
    );
    portfolio(&mut engine, PortfolioInput::Image(ImageInput::Open { index: 2 }), photos);

    let merch = activate(&mut engine, "3");
    assert_eq!(engine.active_surface(), ActiveSurface::Window(merch));
    engine.handle_key("ArrowRight");

    let index = |engine: &DesktopEngine| match engine.view(photos) {
        Some(ContentView::Portfolio(view)) => view.image_viewer().unwrap().current_index(),
        _ => usize::MAX,
    };
    assert_eq!(index(&engine), 2);

    engine.focus_window(photos).unwrap();
    assert!(engine.handle_key("ArrowRight").0.is_handled());
    assert_eq!(index(&engine), 3);
}

#[test]
fn test_zoom_and_rotation_bounds() {
    let mut engine = DesktopEngine::new();
    let w = activate(&mut engine, "1");
    portfolio(&mut engine, PortfolioInput::OpenFolder { folder_id: "photos".into() }, w);
    portfolio(&mut engine, PortfolioInput::Image(ImageInput::Open { index: 0 }), w);

    for _ in 0..20 {
        engine.handle_key("Equal");
    }
    for _ in 0..5 {
        engine.handle_key("KeyR");
    }

    let Some(ContentView::Portfolio(view)) = engine.view(w) else {
        panic!("portfolio view expected");
    };
    let viewer = view.image_viewer().unwrap();
    assert!((viewer.zoom() - 3.0).abs() < 0.001);
    assert_eq!(viewer.rotation(), 90);

    engine.handle_key("ArrowRight");
    let Some(ContentView::Portfolio(view)) = engine.view(w) else {
        panic!("portfolio view expected");
    };
    let viewer = view.image_viewer().unwrap();
    assert!((viewer.zoom() - 1.0).abs() < 0.001);
    assert_eq!(viewer.rotation(), 0);
}

#[test]
fn test_playlist_stays_in_bounds() {
    let mut engine = DesktopEngine::new();
    let w = activate(&mut engine, "1");
    portfolio(&mut engine, PortfolioInput::OpenFolder { folder_id: "videos".into() }, w);

    let effects = portfolio(&mut engine, PortfolioInput::Video(VideoInput::Previous), w);
    assert!(effects.is_empty());

    for _ in 0..10 {
        portfolio(&mut engine, PortfolioInput::Video(VideoInput::Next), w);
    }
    let Some(ContentView::Portfolio(view)) = engine.view(w) else {
        panic!("portfolio view expected");
    };
    let playlist = view.video_player().unwrap().playlist();
    assert_eq!(playlist.current_index(), playlist.len() - 1);

    let effects = portfolio(&mut engine, PortfolioInput::Video(VideoInput::TogglePlay), w);
    assert_eq!(
        effects,
        vec![Effect::Media {
            window_id: w,
            effect: MediaEffect::Play
        }]
    );
}

// =============================================================================
// Gateway Request Tests
// =============================================================================

#[test]
fn test_font_upload_end_to_end() {
    let gateway = MemoryGateway::new();
    let mut engine = DesktopEngine::new();
    engine.set_user(Some(admin()));
    engine.set_now(1_700_000_000_000);

    let w = activate(&mut engine, "1");
    portfolio(&mut engine, PortfolioInput::OpenFolder { folder_id: "fonts".into() }, w);
    engine.run_pending(&gateway);

    portfolio(
        &mut engine,
        PortfolioInput::Font(FontInput::Upload {
            file: UploadFile::new("my-brand.ttf", vec![1u8; 4096]),
        }),
        w,
    );
    let effects = engine.run_pending(&gateway);
    assert!(effects
        .iter()
        .any(|e| matches!(e, Effect::RegisterFont { font, .. } if font.family == "My Brand")));

    let Some(ContentView::Portfolio(view)) = engine.view(w) else {
        panic!("portfolio view expected");
    };
    let previewer = view.font_previewer().unwrap();
    let font = previewer.selected().unwrap();
    assert_eq!(font.format, "ttf");
    assert_eq!(font.font_family, "My Brand");
    assert_eq!(gateway.font_count(), 1);
    assert!(!previewer.is_uploading());
}

#[test]
fn test_font_upload_refused_for_guest() {
    let gateway = MemoryGateway::new();
    let mut engine = DesktopEngine::new();
    let w = activate(&mut engine, "1");
    portfolio(&mut engine, PortfolioInput::OpenFolder { folder_id: "fonts".into() }, w);
    engine.run_pending(&gateway);

    portfolio(
        &mut engine,
        PortfolioInput::Font(FontInput::Upload {
            file: UploadFile::new("my-brand.ttf", vec![1u8; 16]),
        }),
        w,
    );
    assert_eq!(engine.pending_count(), 0);
    engine.run_pending(&gateway);
    assert_eq!(gateway.font_count(), 0);
}

#[test]
fn test_late_completion_is_dropped() {
    let mut engine = DesktopEngine::new();
    let w = activate(&mut engine, "1");
    portfolio(&mut engine, PortfolioInput::OpenFolder { folder_id: "fonts".into() }, w);
    let request = engine.take_requests().remove(0);

    engine.execute(DesktopCommand::CloseWindow { window_id: w }).unwrap();
    let reopened = activate(&mut engine, "1");
    assert_ne!(reopened, w);

    let effects = engine
        .complete(request.id, RequestOutcome::FontsLoaded { fonts: Vec::new() })
        .unwrap();
    assert!(effects.is_empty());
    assert!(matches!(
        engine.complete(request.id, RequestOutcome::FontsLoaded { fonts: Vec::new() }),
        Err(DesktopError::UnknownRequest(_))
    ));
}

#[test]
fn test_background_upload_apply_and_reset() {
    let gateway = MemoryGateway::new();
    let mut engine = DesktopEngine::new();
    engine.set_user(Some(admin()));
    engine.set_now(42);

    engine.execute(DesktopCommand::OpenAdminPanel).unwrap();
    let panel = engine.windows.focused().unwrap();
    engine.run_pending(&gateway);

    engine
        .handle_view_input(
            panel,
            ViewInput::Admin(AdminInput::UploadBackground {
                file: UploadFile::new("sunset.png", vec![9u8; 32]),
            }),
        )
        .unwrap();
    engine.run_pending(&gateway);
    engine
        .handle_view_input(panel, ViewInput::Admin(AdminInput::ApplyBackground))
        .unwrap();

    let url = match engine.background() {
        Background::Image(url) => url.clone(),
        other => panic!("image background expected, got {:?}", other),
    };
    assert!(url.ends_with("/backgrounds/background-42.png"));
    assert_eq!(
        engine.local_store().get(BACKGROUND_STORAGE_KEY).unwrap(),
        Some(url)
    );

    engine.execute(DesktopCommand::ResetBackground).unwrap();
    assert_eq!(
        engine.background(),
        &Background::Gradient(DEFAULT_GRADIENT.to_string())
    );
    assert_eq!(engine.local_store().get(BACKGROUND_STORAGE_KEY).unwrap(), None);
}

#[test]
fn test_uploaded_backgrounds_listed_after_reopen() {
    let gateway = MemoryGateway::new();
    let mut engine = DesktopEngine::new();
    engine.set_user(Some(admin()));
    engine.set_now(77);

    engine.execute(DesktopCommand::OpenAdminPanel).unwrap();
    let panel = engine.windows.focused().unwrap();
    engine
        .handle_view_input(
            panel,
            ViewInput::Admin(AdminInput::UploadBackground {
                file: UploadFile::new("sunset.png", vec![9u8; 32]),
            }),
        )
        .unwrap();
    engine.run_pending(&gateway);
    engine.execute(DesktopCommand::CloseWindow { window_id: panel }).unwrap();

    engine.execute(DesktopCommand::OpenAdminPanel).unwrap();
    let reopened = engine.windows.focused().unwrap();
    assert_ne!(reopened, panel);
    engine.run_pending(&gateway);

    let Some(ContentView::Admin(view)) = engine.view(reopened) else {
        panic!("admin view expected");
    };
    let ids: Vec<&str> = view.uploaded().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["backgrounds/background-77.png"]);
    assert!(view.uploaded()[0].url.ends_with("/backgrounds/background-77.png"));
}

#[test]
fn test_background_upload_failure_notifies() {
    let gateway = MemoryGateway::new();
    gateway.fail(Operation::Upload);
    let mut engine = DesktopEngine::new();
    engine.set_user(Some(admin()));

    engine.execute(DesktopCommand::OpenAdminPanel).unwrap();
    let panel = engine.windows.focused().unwrap();
    engine
        .handle_view_input(
            panel,
            ViewInput::Admin(AdminInput::UploadBackground {
                file: UploadFile::new("sunset.png", vec![9u8; 32]),
            }),
        )
        .unwrap();

    let effects = engine.run_pending(&gateway);
    assert_eq!(
        effects,
        vec![Effect::Notice {
            message: "Failed to upload image. Please try again.".to_string()
        }]
    );
    assert!(!engine.background().is_image());
}
