use tauri_specta::collect_commands;

// Import all command modules
use crate::modules::{
    analytics::commands::*, auth::commands::*, drivers::commands::*, jobs::commands::*,
    messages::commands::*, paint::commands::*, realtime::commands::*, shifts::commands::*,
    shipments::commands::*, warehouse::commands::*,
};

/// Single source of truth for all Tauri commands
/// This eliminates the manual synchronization requirement between
/// specta_builder and tauri::generate_handler!
pub fn get_all_commands() -> tauri_specta::Commands<tauri::Wry> {
    collect_commands![
        // Auth commands
        login_operator,
        login_driver,
        login_with_password,
        restore_session,
        logout,
        // Job board commands
        get_jobs,
        get_machines,
        refresh_job_board,
        start_job,
        pause_job,
        resume_job,
        complete_job,
        create_job,
        update_job,
        delete_job,
        clone_job,
        reorder_jobs,
        set_machine_maintenance,
        get_maintenance_logs,
        // Shift commands
        get_current_shift,
        get_shift_status,
        start_shift,
        end_shift,
        notify_operators_for_shift_end,
        end_shift_with_reports,
        submit_operator_report,
        approve_report,
        approve_all_and_end_shift,
        // Shipment commands
        get_shipments,
        get_driver_shipments,
        create_shipment,
        start_delivery,
        mark_shipment_delivered,
        mark_shipment_failed,
        delete_shipment,
        open_route_assist,
        // Driver commands
        start_location_tracking,
        push_location_fix,
        stop_location_tracking,
        driver_logout,
        // Warehouse commands
        get_warehouse_requests,
        create_warehouse_request,
        complete_warehouse_request,
        scan_pallet,
        get_pallet_scans,
        search_pallets,
        // Paint commands
        get_paint_colors,
        create_paint_color,
        get_paint_movements,
        record_paint_movement,
        refresh_paint_colors,
        // Realtime commands
        get_realtime_status,
        register_push_token,
        // Messaging commands
        get_messages,
        get_unread_message_count,
        send_message,
        mark_message_read,
        // Analytics commands
        get_production_stats,
    ]
}

/// Generate the handler list with all commands imported
#[macro_export]
macro_rules! generate_handler_list {
    () => {{
        use $crate::modules::{
            analytics::commands::*, auth::commands::*, drivers::commands::*, jobs::commands::*,
            messages::commands::*, paint::commands::*, realtime::commands::*, shifts::commands::*,
            shipments::commands::*, warehouse::commands::*,
        };

        tauri::generate_handler![
            // Auth commands
            login_operator,
            login_driver,
            login_with_password,
            restore_session,
            logout,
            // Job board commands
            get_jobs,
            get_machines,
            refresh_job_board,
            start_job,
            pause_job,
            resume_job,
            complete_job,
            create_job,
            update_job,
            delete_job,
            clone_job,
            reorder_jobs,
            set_machine_maintenance,
            get_maintenance_logs,
            // Shift commands
            get_current_shift,
            get_shift_status,
            start_shift,
            end_shift,
            notify_operators_for_shift_end,
            end_shift_with_reports,
            submit_operator_report,
            approve_report,
            approve_all_and_end_shift,
            // Shipment commands
            get_shipments,
            get_driver_shipments,
            create_shipment,
            start_delivery,
            mark_shipment_delivered,
            mark_shipment_failed,
            delete_shipment,
            open_route_assist,
            // Driver commands
            start_location_tracking,
            push_location_fix,
            stop_location_tracking,
            driver_logout,
            // Warehouse commands
            get_warehouse_requests,
            create_warehouse_request,
            complete_warehouse_request,
            scan_pallet,
            get_pallet_scans,
            search_pallets,
            // Paint commands
            get_paint_colors,
            create_paint_color,
            get_paint_movements,
            record_paint_movement,
            refresh_paint_colors,
            // Realtime commands
            get_realtime_status,
            register_push_token,
            // Messaging commands
            get_messages,
            get_unread_message_count,
            send_message,
            mark_message_read,
            // Analytics commands
            get_production_stats,
        ]
    }};
}
