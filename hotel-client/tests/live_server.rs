//! Client against an in-process server bound to an ephemeral port

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use chrono::NaiveDate;
use hotel_client::dialog::{DialogId, DialogService, DialogSurface, DialogView};
use hotel_client::errors::{ErrorAction, FailureKind, ErrorReporter};
use hotel_client::models::{Availability, BookingCreate, BookingUpdate, Guest, Role};
use hotel_client::storage::SecureSession;
use hotel_client::views::{RoomStatus, join_bookings, room_rows};
use hotel_client::loading::LoadingGate;
use hotel_client::models::Room;
use hotel_client::{
    ClientConfig, ClientError, HotelApi, HttpClient, NetworkHttpClient, RenderContext,
};
use hotel_server::{Config, ServerState};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

async fn spawn_server() -> String {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let state = ServerState::initialize(&Config::from_env());
    tokio::spawn(hotel_server::core::serve(
        listener,
        state,
        std::future::pending(),
    ));
    format!("http://{}", addr)
}

fn api(base_url: &str, context: RenderContext) -> HotelApi<NetworkHttpClient> {
    let config = ClientConfig::new(base_url)
        .with_timeout(Duration::from_secs(5))
        .with_render_context(context);
    HotelApi::new(NetworkHttpClient::new(&config).unwrap())
}

fn stay() -> BookingCreate {
    let check_in = NaiveDate::from_ymd_opt(2027, 1, 10).unwrap();
    BookingCreate {
        room_id: 2,
        guest: Guest {
            name: "Noa Levi".to_string(),
            email: "noa@example.com".to_string(),
            phone: "+972 50 000 0000".to_string(),
        },
        availability: Availability {
            check_in,
            check_out: NaiveDate::from_ymd_opt(2027, 1, 12).unwrap(),
            adults: 2,
            children: 0,
            extra_requests: None,
        },
        payment: None,
        pay_status: false,
    }
}

#[tokio::test]
async fn test_login_stores_obfuscated_token() {
    let base = spawn_server().await;
    let api = api(&base, RenderContext::Browser);

    let resp = api.login("admin", "admin123").await.unwrap();
    assert_eq!(resp.account.role, Role::Admin);
    assert!(!resp.jwt_token.is_empty());
    assert!(api.is_logged_in());
    assert_eq!(api.http().session().token().as_deref(), Some(resp.jwt_token.as_str()));

    api.logout();
    assert!(!api.is_logged_in());
}

#[tokio::test]
async fn test_bad_credentials_surface_server_message() {
    let base = spawn_server().await;
    let api = api(&base, RenderContext::Browser);

    let err = api.login("nobody@example.com", "x").await.unwrap_err();
    match &err {
        ClientError::Api { status, message, .. } => {
            assert_eq!(*status, 400);
            assert_eq!(message, "Email or password is incorrect");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(FailureKind::of(&err), FailureKind::Generic);
    assert!(!api.is_logged_in());
}

#[tokio::test]
async fn test_booking_flow_after_login() {
    let base = spawn_server().await;
    let api = api(&base, RenderContext::Browser);
    api.login("reception", "reception123").await.unwrap();

    let booking = api.create_booking(&stay()).await.unwrap();
    assert!(!booking.pay_status);
    assert!(booking.payment.amount > rust_decimal::Decimal::ZERO);

    let updated = api
        .update_booking(
            booking.id,
            &BookingUpdate {
                room_id: Some(3),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.room_id, 3);

    let confirmation = api
        .send_payment_confirmation(booking.id, None)
        .await
        .unwrap();
    assert_eq!(confirmation.email, "noa@example.com");

    let rooms = api.rooms().await.unwrap();
    let bookings = api.bookings().await.unwrap();
    let rows = room_rows(&rooms, &bookings);
    let row = rows.iter().find(|r| r.room.id == 3).unwrap();
    assert_eq!(row.status, RoomStatus::Occupied);
    assert_eq!(join_bookings(&rooms, &bookings).len(), bookings.len());

    api.delete_booking(booking.id).await.unwrap();
    let err = api.delete_booking(booking.id).await.unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn test_server_render_context_sends_no_token() {
    let base = spawn_server().await;
    let api = api(&base, RenderContext::Server);
    api.login("admin", "admin123").await.unwrap();

    // Token is stored, but never attached outside the browser
    let err = api.create_booking(&stay()).await.unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert_eq!(FailureKind::of(&err), FailureKind::SessionExpired);
}

#[derive(Default)]
struct CountingSurface {
    renders: AtomicUsize,
}

impl DialogSurface for CountingSurface {
    fn render(&self, _view: &DialogView) {
        self.renders.fetch_add(1, Ordering::SeqCst);
    }
    fn dismiss(&self, _id: DialogId) {}
}

#[tokio::test]
async fn test_unauthorized_report_logs_out() {
    let base = spawn_server().await;
    let session = SecureSession::in_memory();
    let config = ClientConfig::new(&base).with_render_context(RenderContext::Server);
    let http = NetworkHttpClient::new(&config)
        .unwrap()
        .with_session(session.clone());
    let api = HotelApi::new(http);

    let dialogs = DialogService::new();
    let surface = Arc::new(CountingSurface::default());
    dialogs.attach_surface(surface.clone());
    let reporter = ErrorReporter::new(dialogs.clone(), session.clone());

    // Outside the browser the stored token is not sent, so the call is rejected
    session.save_token("stale");
    let err = api.create_booking(&stay()).await.unwrap_err();
    assert_eq!(reporter.report(&err, None), ErrorAction::RedirectToLogin);
    assert_eq!(session.token(), None);
    assert_eq!(surface.renders.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_non_api_request_holds_loading_gate() {
    let base = spawn_server().await;
    let api = api(&base, RenderContext::Browser);
    let http = api.http();

    let rx = http.gate().subscribe();
    let body = http.fetch_text("/health").await.unwrap();
    assert!(body.contains("healthy"));
    // Marker went on and back off
    assert!(rx.has_changed().unwrap());
    assert!(!http.gate().is_loading());
    assert_eq!(http.gate().in_flight(), 0);

    // API calls never touch the gate
    let rx = http.gate().subscribe();
    api.rooms().await.unwrap();
    assert!(!rx.has_changed().unwrap());
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = api(&format!("http://{}", addr), RenderContext::Browser);
    let err = api.rooms().await.unwrap_err();
    assert!(err.is_transport());
    assert_eq!(FailureKind::of(&err), FailureKind::Network);
}

/// Answers every connection with `response` verbatim, or never answers when `None`
async fn spawn_raw(response: Option<&'static str>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            tokio::spawn(async move {
                let mut buf = [0u8; 4096];
                let _ = socket.read(&mut buf).await;
                match response {
                    Some(raw) => {
                        let _ = socket.write_all(raw.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    }
                    None => std::future::pending::<()>().await,
                }
            });
        }
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_malformed_success_body_is_generic_with_retry() {
    let base = spawn_raw(Some(
        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 9\r\nConnection: close\r\n\r\nnot json!",
    ))
    .await;
    let api = api(&base, RenderContext::Browser);

    let err = api.rooms().await.unwrap_err();
    assert!(matches!(err, ClientError::Http(_)));
    assert!(!err.is_transport());
    let kind = FailureKind::of(&err);
    assert_eq!(kind, FailureKind::Generic);
    assert!(kind.offers_retry());
}

#[tokio::test]
async fn test_per_request_timeout_is_network_error() {
    let base = spawn_raw(None).await;
    let api = api(&base, RenderContext::Browser);

    let err = api
        .http()
        .get_with_timeout::<Vec<Room>>("/api/rooms", Duration::from_millis(200))
        .await
        .unwrap_err();
    assert!(err.is_transport());
    assert_eq!(FailureKind::of(&err), FailureKind::Network);
}

#[tokio::test]
async fn test_shared_gate_sees_page_requests() {
    let base = spawn_server().await;
    let gate = LoadingGate::new(Duration::from_secs(30));
    let config = ClientConfig::new(&base).with_timeout(Duration::from_secs(5));
    let http = NetworkHttpClient::new(&config).unwrap().with_gate(gate.clone());

    let rx = gate.subscribe();
    http.fetch_text("/health").await.unwrap();
    assert!(rx.has_changed().unwrap());
    assert_eq!(gate.in_flight(), 0);
}
