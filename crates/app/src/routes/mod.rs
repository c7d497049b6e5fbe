pub mod calendar;
pub mod clients;
pub mod consultations;
pub mod documents;
pub mod payments;
pub mod profile;
pub mod reference;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBookOpen, LdCalendar, LdCreditCard, LdFileText, LdMenu, LdMessageSquare, LdPlus, LdScale,
    LdUpload, LdUser, LdUserPlus, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{mock, Section, Tone, ALL_SECTIONS, DEFAULT_UTC_OFFSET_HOURS};
use shared_ui::{
    AvatarTone, BadgeVariant, Button, ButtonVariant, InitialsAvatar, PageActions, PageHeader,
    PageHeading, PageSubtitle, PageTitle, Sidebar, SidebarContent, SidebarFooter, SidebarHeader,
    SidebarInset, SidebarMenu, SidebarMenuButton, SidebarMenuItem, SidebarProvider,
    SidebarTrigger, today, Date,
};

use calendar::CalendarPanel;
use clients::ClientsPanel;
use consultations::ConsultationsPanel;
use documents::DocumentsPanel;
use payments::PaymentsPanel;
use profile::ProfilePanel;
use reference::ReferencePanel;

/// View state of the dashboard: the mounted section and the day picked in
/// the calendar panel.
#[derive(Clone, Copy)]
pub struct DashboardState {
    pub section: Signal<Section>,
    pub selected_date: Signal<Option<Date>>,
    /// Whole hours from UTC that decide which day is today.
    pub utc_offset_hours: i8,
}

impl DashboardState {
    pub fn new(section: Section, utc_offset_hours: i8) -> Self {
        Self {
            section: Signal::new(section),
            selected_date: Signal::new(Some(today(utc_offset_hours))),
            utc_offset_hours,
        }
    }

    pub fn current(&self) -> Section {
        *self.section.read()
    }

    /// Switch the mounted panel. Inputs come from the closed navigation list,
    /// so there is nothing to validate.
    pub fn set_section(&mut self, section: Section) {
        tracing::debug!(from = %self.current(), to = %section, "switching section");
        self.section.set(section);
    }
}

pub fn use_dashboard() -> DashboardState {
    use_context::<DashboardState>()
}

/// The single-page dashboard: sidebar navigation plus exactly one panel.
#[component]
pub fn Dashboard(
    #[props(default)] initial_section: Section,
    #[props(default = DEFAULT_UTC_OFFSET_HOURS)] utc_offset_hours: i8,
) -> Element {
    let state = use_context_provider(|| DashboardState::new(initial_section, utc_offset_hours));

    rsx! {
        AppLayout {
            SectionPanel { section: state.current() }
        }
    }
}

/// Mount the panel for `section` and nothing else.
#[component]
pub fn SectionPanel(section: Section) -> Element {
    match section {
        Section::Consultations => rsx! { ConsultationsPanel {} },
        Section::Documents => rsx! { DocumentsPanel {} },
        Section::Payments => rsx! { PaymentsPanel {} },
        Section::Clients => rsx! { ClientsPanel {} },
        Section::Calendar => rsx! { CalendarPanel {} },
        Section::Reference => rsx! { ReferencePanel {} },
        Section::Profile => rsx! { ProfilePanel {} },
    }
}

/// Sidebar with brand, navigation and the signed-in consultant.
#[component]
fn AppLayout(children: Element) -> Element {
    let mut state = use_dashboard();
    let active = state.current();
    let consultant = mock::consultant();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarProvider {
            Sidebar {
                SidebarHeader {
                    h1 { class: "sidebar-brand",
                        span { class: "sidebar-brand-icon",
                            Icon::<LdScale> { icon: LdScale, width: 28, height: 28 }
                        }
                        "LegalHub"
                    }
                    p { class: "sidebar-tagline", "Юридическая платформа" }
                }

                SidebarContent {
                    SidebarMenu {
                        for section in ALL_SECTIONS.iter().copied() {
                            SidebarMenuItem { key: "{section.id()}",
                                SidebarMenuButton {
                                    active: section == active,
                                    onclick: move |_| state.set_section(section),
                                    {section_icon(section)}
                                    span { "data-nav": section.id(), "{section.label()}" }
                                }
                            }
                        }
                    }
                }

                SidebarFooter {
                    div { class: "sidebar-user",
                        InitialsAvatar { initials: consultant.initials(), tone: AvatarTone::Primary }
                        div {
                            p { class: "sidebar-user-name", "{consultant.name}" }
                            p { class: "sidebar-user-title", "{consultant.title}" }
                        }
                    }
                }
            }

            SidebarInset {
                SidebarTrigger {
                    Icon::<LdMenu> { icon: LdMenu, width: 20, height: 20 }
                }
                {children}
            }
        }
    }
}

/// Common panel frame: title, subtitle and the optional header action.
///
/// The root carries `data-section` so exactly one mounted panel is
/// identifiable in the rendered output.
#[component]
fn Panel(section: Section, children: Element) -> Element {
    rsx! {
        div { class: "panel", "data-section": section.id(),
            PageHeader {
                PageHeading {
                    PageTitle { "{section.label()}" }
                    PageSubtitle { "{section.subtitle()}" }
                }
                if let Some(label) = section.action_label() {
                    PageActions {
                        Button { variant: ButtonVariant::Primary,
                            {action_icon(section)}
                            "{label}"
                        }
                    }
                }
            }
            {children}
        }
    }
}

fn section_icon(section: Section) -> Element {
    match section {
        Section::Consultations => rsx! { Icon::<LdMessageSquare> { icon: LdMessageSquare, width: 20, height: 20 } },
        Section::Documents => rsx! { Icon::<LdFileText> { icon: LdFileText, width: 20, height: 20 } },
        Section::Payments => rsx! { Icon::<LdCreditCard> { icon: LdCreditCard, width: 20, height: 20 } },
        Section::Clients => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 20, height: 20 } },
        Section::Calendar => rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 20, height: 20 } },
        Section::Reference => rsx! { Icon::<LdBookOpen> { icon: LdBookOpen, width: 20, height: 20 } },
        Section::Profile => rsx! { Icon::<LdUser> { icon: LdUser, width: 20, height: 20 } },
    }
}

fn action_icon(section: Section) -> Element {
    match section {
        Section::Documents => rsx! { Icon::<LdUpload> { icon: LdUpload, width: 20, height: 20 } },
        Section::Clients => rsx! { Icon::<LdUserPlus> { icon: LdUserPlus, width: 20, height: 20 } },
        _ => rsx! { Icon::<LdPlus> { icon: LdPlus, width: 20, height: 20 } },
    }
}

/// Map a resolved tone to the badge variant that draws it.
pub fn tone_badge_variant(tone: Tone) -> BadgeVariant {
    match tone {
        Tone::Success => BadgeVariant::Success,
        Tone::Warning => BadgeVariant::Warning,
        Tone::Info => BadgeVariant::Info,
        Tone::Danger => BadgeVariant::Danger,
        Tone::Neutral => BadgeVariant::Secondary,
    }
}
