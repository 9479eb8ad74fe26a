//! Declarative `data-action` dispatcher.
//!
//! A single delegated click/change listener on the document resolves the
//! nearest ancestor carrying `data-action` and dispatches on the parsed
//! action. Unknown values are logged and ignored. The composition root
//! installs the listener exactly once.

use std::cell::Cell;

use leptos::prelude::RwSignal;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::layout::modal_service::{InfoKind, ModalKind, ModalService};
use crate::layout::CatalogContext;
use crate::shared::toast::ToastService;
use crate::system::auth::context::{handle_dashboard_access, AuthState};

/// Everything a `data-action` element can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Filter & search
    Search,
    Reset,
    FilterChange,
    // Pagination
    NextPage,
    PrevPage,
    GotoPage,
    // Sponsor flows
    OpenSponsorRegistration,
    OpenSponsorLogin,
    OpenManagement,
    ToggleLoginDropdown,
    OpenTouristRegistration,
    OpenGuideRegistration,
    ProcessSponsorLogin,
    RedirectSponsorDashboard,
    // Guide actions
    BookGuide,
    ContactGuide,
    ShowGuideDetail,
    ViewDetails,
    // Bookmark & comparison
    RemoveBookmark,
    RemoveFromComparison,
    ViewBookingDetails,
    // Utility
    TriggerPhotoUpload,
    OpenChat,
    SendEmail,
    ScrollToGuides,
    // Footer & information dialogs
    ShowFaq,
    ShowCancellation,
    ShowSafety,
    ShowPaymentHelp,
    ShowGuideRegistrationHelp,
    ShowProfileOptimization,
    ShowEarningsDashboard,
    ShowGuideResources,
    ShowCookieSettings,
    ClearAllCookies,
    ShowGuideRegistrationModal,
    ShowTouristRegistrationModal,
    ShowManagementCenter,
    ShowHelp,
    ShowAbout,
    ShowTerms,
    ShowPrivacy,
    ShowCookies,
    ShowCompliance,
}

impl Action {
    /// Parse a `data-action` attribute value; unknown values are `None`.
    pub fn parse(value: &str) -> Option<Self> {
        let action = match value {
            "search" => Action::Search,
            "reset" => Action::Reset,
            "filter-change" => Action::FilterChange,
            "next-page" => Action::NextPage,
            "prev-page" => Action::PrevPage,
            "goto-page" => Action::GotoPage,
            "open-sponsor-registration" => Action::OpenSponsorRegistration,
            "open-sponsor-login" => Action::OpenSponsorLogin,
            "open-management" => Action::OpenManagement,
            "toggle-login-dropdown" => Action::ToggleLoginDropdown,
            "open-tourist-registration" => Action::OpenTouristRegistration,
            "open-guide-registration" => Action::OpenGuideRegistration,
            "process-sponsor-login" => Action::ProcessSponsorLogin,
            "redirect-sponsor-dashboard" => Action::RedirectSponsorDashboard,
            "book-guide" => Action::BookGuide,
            "contact-guide" => Action::ContactGuide,
            "show-guide-detail" => Action::ShowGuideDetail,
            "view-details" => Action::ViewDetails,
            "remove-bookmark" => Action::RemoveBookmark,
            "remove-from-comparison" => Action::RemoveFromComparison,
            "view-booking-details" => Action::ViewBookingDetails,
            "trigger-photo-upload" => Action::TriggerPhotoUpload,
            "open-chat" => Action::OpenChat,
            "send-email" => Action::SendEmail,
            "scroll-to-guides" => Action::ScrollToGuides,
            "show-faq" => Action::ShowFaq,
            "show-cancellation" => Action::ShowCancellation,
            "show-safety" => Action::ShowSafety,
            "show-payment-help" => Action::ShowPaymentHelp,
            "show-guide-registration-help" => Action::ShowGuideRegistrationHelp,
            "show-profile-optimization" => Action::ShowProfileOptimization,
            "show-earnings-dashboard" => Action::ShowEarningsDashboard,
            "show-guide-resources" => Action::ShowGuideResources,
            "show-cookie-settings" => Action::ShowCookieSettings,
            "clear-all-cookies" => Action::ClearAllCookies,
            "show-guide-registration-modal" => Action::ShowGuideRegistrationModal,
            "show-tourist-registration-modal" => Action::ShowTouristRegistrationModal,
            "show-management-center" => Action::ShowManagementCenter,
            "show-help" => Action::ShowHelp,
            "show-about" => Action::ShowAbout,
            "show-terms" => Action::ShowTerms,
            "show-privacy" => Action::ShowPrivacy,
            "show-cookies" => Action::ShowCookies,
            "show-compliance" => Action::ShowCompliance,
            _ => return None,
        };
        Some(action)
    }
}

/// Handler context captured by the delegated listener.
#[derive(Clone, Copy)]
pub struct Dispatcher {
    pub catalog: CatalogContext,
    pub modals: ModalService,
    pub auth: RwSignal<AuthState>,
    pub toast: ToastService,
}

thread_local! {
    static DISPATCHER_INSTALLED: Cell<bool> = const { Cell::new(false) };
}

/// Install the delegated listeners on the document. Guarded so a second call
/// is a no-op.
pub fn install_action_dispatcher(dispatcher: Dispatcher) {
    if DISPATCHER_INSTALLED.with(|installed| installed.replace(true)) {
        log::warn!("Action dispatcher already installed");
        return;
    }

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let click_dispatcher = dispatcher;
    let on_click = Closure::<dyn FnMut(web_sys::MouseEvent)>::wrap(Box::new(
        move |event: web_sys::MouseEvent| {
            let Some(element) = action_element(event.target()) else {
                return;
            };
            let Some(value) = element.get_attribute("data-action") else {
                return;
            };
            event.prevent_default();
            match Action::parse(&value) {
                Some(action) => click_dispatcher.handle(action, &element),
                None => log::info!("Unknown data-action: {}", value),
            }
        },
    ));
    let _ = document
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    on_click.forget();

    // change delegation for the filter selects
    let change_dispatcher = dispatcher;
    let on_change = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(
        move |event: web_sys::Event| {
            let Some(element) = action_element(event.target()) else {
                return;
            };
            if element.get_attribute("data-action").as_deref() == Some("filter-change") {
                change_dispatcher.handle(Action::FilterChange, &element);
            }
        },
    ));
    let _ = document
        .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref());
    on_change.forget();

    log::info!("Action dispatcher installed");
}

fn action_element(target: Option<web_sys::EventTarget>) -> Option<Element> {
    let element: Element = target?.dyn_into().ok()?;
    element.closest("[data-action]").ok()?
}

fn attr(element: &Element, name: &str) -> Option<String> {
    element.get_attribute(name)
}

fn select_value(id: &str) -> String {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|e| e.dyn_into::<web_sys::HtmlSelectElement>().ok())
        .map(|s| s.value())
        .unwrap_or_default()
}

fn set_select_value(id: &str, value: &str) {
    if let Some(select) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|e| e.dyn_into::<web_sys::HtmlSelectElement>().ok())
    {
        select.set_value(value);
    }
}

impl Dispatcher {
    fn apply_current_filters(&self) {
        self.catalog.apply_filters(
            &select_value("locationFilter"),
            &select_value("languageFilter"),
            &select_value("priceFilter"),
        );
    }

    fn guide_id(element: &Element) -> Option<u32> {
        attr(element, "data-guide-id").and_then(|v| v.parse().ok())
    }

    pub fn handle(&self, action: Action, element: &Element) {
        match action {
            // Filter & search
            Action::Search | Action::FilterChange => self.apply_current_filters(),
            Action::Reset => {
                set_select_value("locationFilter", "");
                set_select_value("languageFilter", "");
                set_select_value("priceFilter", "");
                self.catalog.reset_filters();
            }

            // Pagination
            Action::NextPage => self.catalog.next_page(),
            Action::PrevPage => self.catalog.prev_page(),
            Action::GotoPage => {
                if let Some(page) = attr(element, "data-page").and_then(|v| v.parse().ok()) {
                    self.catalog.goto_page(page);
                }
            }

            // Sponsor flows
            Action::OpenSponsorRegistration => self.modals.open(ModalKind::SponsorRegistration),
            Action::OpenSponsorLogin | Action::ProcessSponsorLogin => {
                self.modals.open(ModalKind::SponsorLogin)
            }
            Action::RedirectSponsorDashboard => handle_dashboard_access(self.auth, self.modals),
            Action::OpenManagement | Action::ShowManagementCenter => {
                self.toast.info("管理センターは開発中です")
            }
            Action::ToggleLoginDropdown => toggle_class("loginDropdown", "show"),
            Action::OpenTouristRegistration
            | Action::OpenGuideRegistration
            | Action::ShowGuideRegistrationModal
            | Action::ShowTouristRegistrationModal => self.toast.info("登録機能は準備中です"),

            // Guide actions
            Action::BookGuide | Action::ContactGuide | Action::ShowGuideDetail
            | Action::ViewDetails => {
                if let Some(id) = Self::guide_id(element) {
                    self.modals.open(ModalKind::GuideDetail(id));
                }
            }

            // Bookmark & comparison
            Action::RemoveBookmark => self.toast.info("ブックマークから削除しました"),
            Action::RemoveFromComparison => self.toast.info("比較リストから削除しました"),
            Action::ViewBookingDetails => {
                if let Some(booking_id) = attr(element, "data-booking-id") {
                    self.toast.info(format!("予約 {} の詳細は準備中です", booking_id));
                }
            }

            // Utility
            Action::TriggerPhotoUpload => click_element("guideProfilePhoto"),
            Action::OpenChat => {
                if let Some(target) = attr(element, "data-target") {
                    if let Some(window) = web_sys::window() {
                        let _ = window.open_with_url_and_target(&target, "_blank");
                    }
                }
            }
            Action::SendEmail => {
                if let Some(email) = attr(element, "data-email") {
                    crate::system::auth::context::navigate(&format!("mailto:{}", email));
                }
            }
            Action::ScrollToGuides => scroll_to("guideCardsContainer"),

            // Informational dialogs
            Action::ShowFaq => self.modals.open(ModalKind::Info(InfoKind::Faq)),
            Action::ShowCancellation => self.modals.open(ModalKind::Info(InfoKind::Cancellation)),
            Action::ShowSafety => self.modals.open(ModalKind::Info(InfoKind::Safety)),
            Action::ShowHelp => self.modals.open(ModalKind::Info(InfoKind::Help)),
            Action::ShowAbout => self.modals.open(ModalKind::Info(InfoKind::About)),
            Action::ShowTerms => self.modals.open(ModalKind::Info(InfoKind::Terms)),
            Action::ShowPrivacy => self.modals.open(ModalKind::Info(InfoKind::Privacy)),
            Action::ShowCookies => self.modals.open(ModalKind::Info(InfoKind::Cookies)),
            Action::ShowCompliance => self.modals.open(ModalKind::Info(InfoKind::Compliance)),

            // Not built yet; keep the click from dying silently
            Action::ShowPaymentHelp
            | Action::ShowGuideRegistrationHelp
            | Action::ShowProfileOptimization
            | Action::ShowEarningsDashboard
            | Action::ShowGuideResources
            | Action::ShowCookieSettings
            | Action::ClearAllCookies => self.toast.info("この機能は準備中です"),
        }
    }
}

fn click_element(id: &str) {
    if let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok())
    {
        element.click();
    }
}

fn toggle_class(id: &str, class: &str) {
    if let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    {
        let list = element.class_list();
        let _ = list.toggle(class);
    }
}

fn scroll_to(id: &str) {
    if let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    {
        element.scroll_into_view();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_actions_parse() {
        assert_eq!(Action::parse("search"), Some(Action::Search));
        assert_eq!(Action::parse("next-page"), Some(Action::NextPage));
        assert_eq!(
            Action::parse("open-sponsor-login"),
            Some(Action::OpenSponsorLogin)
        );
        assert_eq!(Action::parse("show-compliance"), Some(Action::ShowCompliance));
    }

    #[test]
    fn unknown_action_parses_to_none() {
        assert_eq!(Action::parse("launch-rocket"), None);
        assert_eq!(Action::parse(""), None);
    }
}
