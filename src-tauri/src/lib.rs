pub mod commands;
pub mod modules;
pub mod shared;

use commands::get_all_commands;
use modules::{
    analytics::{AnalyticsRepositoryImpl, AnalyticsService},
    auth::{AuthRepositoryImpl, AuthService, SessionContext, SessionStore},
    drivers::{DriverLocationRepositoryImpl, LocationTracker},
    jobs::{JobRepositoryImpl, JobService},
    messages::{MessageRepositoryImpl, MessageService},
    paint::{PaintRepositoryImpl, PaintService},
    realtime::{
        ConnectionStatus, EventSink, NotificationRepository, NotificationRepositoryImpl,
        RealtimeEvent, RealtimeNotifier,
    },
    shifts::{ShiftRepositoryImpl, ShiftService},
    shipments::{ShipmentRepositoryImpl, ShipmentService},
    warehouse::{WarehouseRepositoryImpl, WarehouseService},
};
use shared::{ApiClient, AppConfig, Poller};
use std::sync::Arc;
use tauri::{Emitter, Manager};
use tokio_util::sync::CancellationToken;

// tauri-specta: generate TS types + typed command client from Rust commands
use specta_typescript::Typescript;
use tauri_specta::Builder as SpectaBuilder;

use tauri::async_runtime::spawn;

/// Realtime notice forwarded to the webview; the pages refetch through the
/// read commands instead of merging payloads.
#[derive(Clone, serde::Serialize, specta::Type)]
struct RealtimeNotice {
    kind: String,
}

/// Emitted after a poller applied a fresh snapshot.
#[derive(Clone, serde::Serialize, specta::Type)]
struct StoreRefreshed {
    store: String,
}

/// The per-view poll loops. Realtime events nudge these instead of writing
/// into the stores directly.
struct PollerHub {
    jobs: Arc<Poller>,
    shifts: Arc<Poller>,
    shipments: Arc<Poller>,
    warehouse: Arc<Poller>,
    messages: Arc<Poller>,
}

/// Routes realtime events to the matching poller and mirrors them (plus
/// connectivity changes) to the webview.
struct WebviewSink {
    app: tauri::AppHandle,
    pollers: Arc<PollerHub>,
}

impl EventSink for WebviewSink {
    fn deliver(&self, event: &RealtimeEvent) {
        match event {
            RealtimeEvent::NewWarehouseRequest(_) => self.pollers.warehouse.nudge(),
            RealtimeEvent::ShiftEndRequest(_) => self.pollers.shifts.nudge(),
            RealtimeEvent::NewMessage(_) => self.pollers.messages.nudge(),
            RealtimeEvent::Unknown { .. } => {}
        }
        let _ = self.app.emit(
            "fabrika://realtime-event",
            RealtimeNotice {
                kind: event.kind_name().to_string(),
            },
        );
    }

    fn status_changed(&self, status: ConnectionStatus) {
        let _ = self.app.emit("fabrika://realtime-status", status);
    }
}

/// Spawn one poll loop that refreshes a service snapshot and tells the
/// webview when a fresh one landed.
macro_rules! spawn_poll_loop {
    ($poller:expr, $app:expr, $store_name:literal, $service:expr) => {{
        let poller = $poller.clone();
        let service = $service.clone();
        let app_handle = $app.clone();
        spawn(poller.run(move || {
            let service = service.clone();
            let app_handle = app_handle.clone();
            async move {
                service.refresh().await?;
                let _ = app_handle.emit(
                    "fabrika://store-refreshed",
                    StoreRefreshed { store: $store_name.to_string() },
                );
                Ok(())
            }
        }));
    }};
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Load environment variables
    dotenvy::dotenv().ok();

    let specta_builder = SpectaBuilder::<tauri::Wry>::new().commands(get_all_commands());

    #[cfg(debug_assertions)]
    if let Err(e) = specta_builder.export(Typescript::default(), "../src/types/bindings.ts") {
        eprintln!("Warning: Failed to export TypeScript bindings: {}", e);
        eprintln!("TypeScript types may be out of sync. Consider running cargo build again.");
    }

    tauri::Builder::default()
        // Tell Tauri how to invoke commands from centralized registry
        .invoke_handler(crate::generate_handler_list!())
        .plugin(tauri_plugin_opener::init())
        .plugin(
            tauri_plugin_log::Builder::new()
                .clear_targets()
                .targets([
                    tauri_plugin_log::Target::new(tauri_plugin_log::TargetKind::Stdout),
                ])
                .level(log::LevelFilter::Debug)
                .format(|out, message, record| {
                    // Extract meaningful module name from path
                    let target = record.target();

                    if target.starts_with("fabrika_lib::modules::") {
                        // Backend module: fabrika_lib::modules::jobs::commands -> [LEVEL] [BACKEND] [jobs] message
                        let module = target
                            .strip_prefix("fabrika_lib::modules::")
                            .and_then(|s| s.split("::").next())
                            .unwrap_or("");
                        out.finish(format_args!(
                            "[{}] [BACKEND] [{}] {}",
                            record.level(),
                            module,
                            message
                        ))
                    } else if target.starts_with("fabrika_lib") {
                        // General backend: [LEVEL] [BACKEND] message
                        out.finish(format_args!("[{}] [BACKEND] {}", record.level(), message))
                    } else if target.starts_with("webview:") {
                        // Frontend logs: strip webview prefix
                        out.finish(format_args!("[{}] {}", record.level(), message))
                    } else {
                        // Other logs
                        out.finish(format_args!("[{}] [{}] {}", record.level(), target, message))
                    }
                })
                .build(),
        )
        .setup(move |app| {
            // If you want typed events, mount specta's event hooks here.
            specta_builder.mount_events(app);

            let config = AppConfig::from_env()?;
            let api = Arc::new(ApiClient::new(&config)?);

            // Session layer: persisted per-role blobs restored at launch
            let data_dir = app.path().app_data_dir()?;
            let session_store = SessionStore::new(data_dir.join("sessions"))?;
            let session_context = Arc::new(SessionContext::new(session_store));
            session_context.restore_persisted();

            let auth_service = Arc::new(AuthService::new(
                Arc::new(AuthRepositoryImpl::new(Arc::clone(&api))),
                Arc::clone(&session_context),
            ));

            // Lifecycle controllers
            let job_service = Arc::new(JobService::new(Arc::new(JobRepositoryImpl::new(
                Arc::clone(&api),
            ))));
            let shift_service = Arc::new(ShiftService::new(
                Arc::new(ShiftRepositoryImpl::new(Arc::clone(&api))),
                Arc::clone(&job_service),
            ));
            let warehouse_service = Arc::new(WarehouseService::new(Arc::new(
                WarehouseRepositoryImpl::new(Arc::clone(&api)),
            )));
            let shipment_service = Arc::new(ShipmentService::new(
                Arc::new(ShipmentRepositoryImpl::new(Arc::clone(&api))),
                Arc::clone(&warehouse_service),
            ));
            let paint_service = Arc::new(PaintService::new(Arc::new(PaintRepositoryImpl::new(
                Arc::clone(&api),
            ))));
            let message_service = Arc::new(MessageService::new(Arc::new(
                MessageRepositoryImpl::new(Arc::clone(&api)),
            )));
            let analytics_service = Arc::new(AnalyticsService::new(Arc::new(
                AnalyticsRepositoryImpl::new(Arc::clone(&api)),
            )));
            let location_tracker =
                LocationTracker::new(Arc::new(DriverLocationRepositoryImpl::new(Arc::clone(&api))));
            let notification_repo: Arc<dyn NotificationRepository> =
                Arc::new(NotificationRepositoryImpl::new(Arc::clone(&api)));

            // One token tears every background loop down at exit
            let shutdown = CancellationToken::new();

            let pollers = Arc::new(PollerHub {
                jobs: Poller::new("jobs", config.jobs_poll_interval, shutdown.child_token()),
                shifts: Poller::new("shifts", config.shifts_poll_interval, shutdown.child_token()),
                shipments: Poller::new(
                    "shipments",
                    config.shipments_poll_interval,
                    shutdown.child_token(),
                ),
                warehouse: Poller::new(
                    "warehouse",
                    config.warehouse_poll_interval,
                    shutdown.child_token(),
                ),
                messages: Poller::new(
                    "messages",
                    config.messages_poll_interval,
                    shutdown.child_token(),
                ),
            });

            let app_handle = app.handle().clone();
            spawn_poll_loop!(pollers.jobs, app_handle, "jobs", job_service);
            spawn_poll_loop!(pollers.shifts, app_handle, "shifts", shift_service);
            spawn_poll_loop!(pollers.shipments, app_handle, "shipments", shipment_service);
            spawn_poll_loop!(pollers.warehouse, app_handle, "warehouse", warehouse_service);
            spawn_poll_loop!(pollers.messages, app_handle, "messages", message_service);

            // Realtime channel: events nudge the pollers, never the stores
            let sink = Arc::new(WebviewSink {
                app: app.handle().clone(),
                pollers: Arc::clone(&pollers),
            });
            let notifier = RealtimeNotifier::new(config.ws_url.clone(), sink);
            spawn(Arc::clone(&notifier).run(shutdown.child_token()));
            log::info!("Background refresh loops and realtime notifier started");

            // Manage state so commands can access services via `State<T>`
            app.manage(config);
            app.manage(auth_service);
            app.manage(job_service);
            app.manage(shift_service);
            app.manage(shipment_service);
            app.manage(warehouse_service);
            app.manage(paint_service);
            app.manage(message_service);
            app.manage(analytics_service);
            app.manage(location_tracker);
            app.manage(notification_repo);
            app.manage(notifier);
            app.manage(shutdown);

            Ok(())
        })
        .run(tauri::generate_context!())
        .unwrap_or_else(|e| {
            eprintln!("Failed to run Tauri application: {}", e);
            std::process::exit(1);
        });
}
