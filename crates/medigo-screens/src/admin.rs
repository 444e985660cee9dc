//! # Admin Layout & Settings
//!
//! State for the admin shell (sidebar + menu) and the settings form.
//!
//! Per-screen state objects, passed explicitly to whatever renders them;
//! sidebar visibility and modal flags are never ambient globals.

use tracing::info;

use medigo_core::error::CoreResult;
use medigo_core::validation::{validate_site_name, validate_support_email};

/// Route the logout action navigates to.
const AUTH_PATH: &str = "/auth";

/// One entry in the admin sidebar menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub path: &'static str,
    pub label: &'static str,
}

/// The admin sidebar menu, in display order.
pub const ADMIN_MENU: &[MenuItem] = &[
    MenuItem { path: "/admin", label: "Dashboard" },
    MenuItem { path: "/admin/doctors", label: "Doctors" },
    MenuItem { path: "/admin/patients", label: "Patients" },
    MenuItem { path: "/admin/appointments", label: "Doctor Appointments" },
    MenuItem { path: "/admin/categories", label: "Product Categories" },
    MenuItem { path: "/admin/products", label: "Pharmacy" },
    MenuItem { path: "/admin/inventory", label: "Inventory" },
    MenuItem { path: "/admin/orders", label: "Orders" },
    MenuItem { path: "/admin/lab-tests", label: "Lab Tests" },
    MenuItem { path: "/admin/services", label: "Services Menu" },
    MenuItem { path: "/admin/emergency", label: "Emergency" },
    MenuItem { path: "/admin/banners", label: "Banners" },
    MenuItem { path: "/admin/settings", label: "Settings" },
];

// =============================================================================
// Admin Layout
// =============================================================================

/// Admin shell state: current route and mobile sidebar visibility.
#[derive(Debug, Clone)]
pub struct AdminLayout {
    /// Current route path, used for menu highlighting.
    pub current_path: String,

    /// Mobile sidebar open/closed.
    pub sidebar_open: bool,
}

impl AdminLayout {
    pub fn new() -> Self {
        AdminLayout {
            current_path: "/admin".to_string(),
            sidebar_open: false,
        }
    }

    /// Hamburger button.
    pub fn open_sidebar(&mut self) {
        self.sidebar_open = true;
    }

    /// Close button or backdrop click.
    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }

    /// Menu item click: moves to the route and collapses the mobile sidebar.
    pub fn navigate(&mut self, path: impl Into<String>) {
        self.current_path = path.into();
        self.sidebar_open = false;
    }

    /// Whether a menu entry matches the current route (exact match, as the
    /// sidebar highlights only the page itself, not section prefixes).
    pub fn is_active(&self, path: &str) -> bool {
        self.current_path == path
    }

    /// Logout: routes to the auth screen.
    pub fn logout(&mut self) {
        info!("Admin logout");
        self.navigate(AUTH_PATH);
    }

    /// The menu in display order.
    pub fn menu(&self) -> &'static [MenuItem] {
        ADMIN_MENU
    }
}

impl Default for AdminLayout {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Settings Form
// =============================================================================

/// The admin settings form.
///
/// Saving validates and logs; there is no persistence behind this form yet,
/// matching the platform scope.
#[derive(Debug, Clone)]
pub struct SettingsForm {
    pub site_name: String,
    pub support_email: String,
    pub email_notifications: bool,
    pub appointment_alerts: bool,
}

impl Default for SettingsForm {
    fn default() -> Self {
        SettingsForm {
            site_name: "Medigo Healthcare".to_string(),
            support_email: "support@medigo.com".to_string(),
            email_notifications: true,
            appointment_alerts: true,
        }
    }
}

impl SettingsForm {
    /// Save button: validate every field, then record the change.
    pub fn save(&self) -> CoreResult<()> {
        validate_site_name(&self.site_name)?;
        validate_support_email(&self.support_email)?;

        info!(
            site_name = %self.site_name,
            support_email = %self.support_email,
            email_notifications = self.email_notifications,
            appointment_alerts = self.appointment_alerts,
            "Settings saved"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigate_closes_sidebar() {
        let mut layout = AdminLayout::new();
        layout.open_sidebar();
        layout.navigate("/admin/banners");

        assert!(!layout.sidebar_open);
        assert!(layout.is_active("/admin/banners"));
        assert!(!layout.is_active("/admin"));
    }

    #[test]
    fn test_logout_routes_to_auth() {
        let mut layout = AdminLayout::new();
        layout.logout();
        assert_eq!(layout.current_path, AUTH_PATH);
    }

    #[test]
    fn test_menu_has_settings_and_banners_entries() {
        let layout = AdminLayout::new();
        assert!(layout.menu().iter().any(|m| m.path == "/admin/settings"));
        assert!(layout.menu().iter().any(|m| m.label == "Banners"));
    }

    #[test]
    fn test_settings_save_validates_fields() {
        let form = SettingsForm::default();
        assert!(form.save().is_ok());

        let bad_email = SettingsForm {
            support_email: "not-an-email".to_string(),
            ..Default::default()
        };
        assert!(bad_email.save().is_err());

        let empty_name = SettingsForm {
            site_name: "  ".to_string(),
            ..Default::default()
        };
        assert!(empty_name.save().is_err());
    }
}
