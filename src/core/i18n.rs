//! Site copy, per language
//!
//! All visitor-facing copy lives in immutable per-language tables. A
//! component resolves its table once via [`translations`] and passes the
//! relevant sub-struct down as a plain reference; nothing here is mutable
//! or global state.

/// Languages the site ships in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lang {
    #[default]
    En,
    Es,
}

impl Lang {
    pub fn as_str(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Es => "es",
        }
    }

    pub fn from_str(value: &str) -> Self {
        match value {
            "es" => Lang::Es,
            _ => Lang::En,
        }
    }

    /// Label shown on the header toggle.
    pub fn label(&self) -> &'static str {
        match self {
            Lang::En => "EN",
            Lang::Es => "ES",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Lang::En => Lang::Es,
            Lang::Es => Lang::En,
        }
    }
}

/// A titled blurb (feature cards, installation steps).
pub struct Card {
    pub title: &'static str,
    pub desc: &'static str,
}

pub struct Nav {
    pub features: &'static str,
    pub integration: &'static str,
    pub steps: &'static str,
    pub talk: &'static str,
    pub action: &'static str,
}

pub struct Hero {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cta_primary: &'static str,
    pub cta_secondary: &'static str,
    pub badge1: &'static str,
    pub badge2: &'static str,
    pub badge3: &'static str,
}

pub struct Features {
    pub kicker: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub card1: Card,
    pub card2: Card,
    pub card3: Card,
}

pub struct Integration {
    pub kicker: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub badge1: &'static str,
    pub badge2: &'static str,
    pub badge3: &'static str,
}

pub struct Device {
    pub kicker: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cta: &'static str,
    pub steps: &'static str,
    pub can_do: &'static str,
    pub badge_chat: &'static str,
    pub badge_booking: &'static str,
    pub badge_payments: &'static str,
    pub badge_always_on: &'static str,
    pub stat_active: &'static str,
    pub stat_workload: &'static str,
    pub stat_leads: &'static str,
    pub stat_response: &'static str,
}

pub struct Steps {
    pub kicker: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub s1: Card,
    pub s2: Card,
    pub s3: Card,
    pub s4: Card,
}

pub struct Cta {
    pub kicker: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
}

/// Copy for the phone-frame micro conversation.
pub struct Chat {
    pub assistant: &'static str,
    pub online: &'static str,
    pub proactive: &'static str,
    pub user: &'static str,
    pub ai_response: &'static str,
    pub minimized: &'static str,
    pub chat: &'static str,
}

/// Copy for the browser-frame chat-log demo.
pub struct LiveChat {
    pub starting: &'static str,
    pub m1: &'static str,
    pub m2: &'static str,
    pub m3: &'static str,
    pub m4: &'static str,
    pub m5: &'static str,
    pub quick_book: &'static str,
    pub quick_slots: &'static str,
}

pub struct Translations {
    pub nav: Nav,
    pub hero: Hero,
    pub features: Features,
    pub integration: Integration,
    pub device: Device,
    pub steps: Steps,
    pub cta: Cta,
    pub chat: Chat,
    pub live_chat: LiveChat,
}

/// Resolve the copy table for a language.
pub fn translations(lang: Lang) -> &'static Translations {
    match lang {
        Lang::En => &EN,
        Lang::Es => &ES,
    }
}

static EN: Translations = Translations {
    nav: Nav {
        features: "How it works",
        integration: "Integration",
        steps: "Steps",
        talk: "Talk to us",
        action: "See it in action",
    },
    hero: Hero {
        title: "Your customers book, buy, and get help. While you sleep.",
        subtitle: "ILNAJ deploys intelligent conversational assistants on your website. Sales, appointments, and support - automated with precision.",
        cta_primary: "See it in action",
        cta_secondary: "Talk to us",
        badge1: "Available in continuous operation",
        badge2: "Native multi-language",
        badge3: "Full white-label",
    },
    features: Features {
        kicker: "HOW ILNAJ WORKS",
        title: "Three business processes. One assistant.",
        subtitle: "Designed for commerce, bookings, and support - modular, brand-adaptive, and always on.",
        card1: Card {
            title: "Automated commerce",
            desc: "The assistant presents your catalog, checks real-time inventory, and generates Stripe payment links (deposits, full payment, COD). Purchases complete without manual intervention.",
        },
        card2: Card {
            title: "Appointment management",
            desc: "Clients choose their time slot, the assistant syncs your Google Calendar instantly and sends confirmations. Works 24/7, including weekends.",
        },
        card3: Card {
            title: "Intelligent support",
            desc: "Answers FAQs based on your Google Sheets / CSV documentation and product details. Escalates to email or phone when human judgment is needed.",
        },
    },
    integration: Integration {
        kicker: "TECHNICAL",
        title: "Invisible by design",
        subtitle: "ILNAJ integrates into your website with a single line of code. No conflicts, no complexity - just a widget that works everywhere (WordPress, Shopify, Wix, Custom).",
        badge1: "6+ Native Languages (EN, FR, ES...)",
        badge2: "Adapts to your brand",
        badge3: "Realistic typing effect",
    },
    device: Device {
        kicker: "PREVIEW",
        title: "A live micro-conversation on a loop.",
        subtitle: "Visitors understand the workflow in seconds: proactive help, structured intent, and a clear outcome.",
        cta: "Talk to us",
        steps: "See setup steps",
        can_do: "What it can do",
        badge_chat: "Chat Support",
        badge_booking: "Book Appointments",
        badge_payments: "Process Payments",
        badge_always_on: "24/7 Available",
        stat_active: "Active",
        stat_workload: "Workload",
        stat_leads: "Leads",
        stat_response: "Response",
    },
    steps: Steps {
        kicker: "INSTALLATION",
        title: "From snippet to live assistant.",
        subtitle: "Four steps, designed to stay out of your way.",
        s1: Card {
            title: "Installation (2 min)",
            desc: "Copy one line of code. Compatible with all web environments including WordPress & Shopify.",
        },
        s2: Card {
            title: "Business configuration (5 min)",
            desc: "Enter your services, pricing, and availability. The assistant memorizes your catalog instantly.",
        },
        s3: Card {
            title: "Customization (3 min)",
            desc: "Adjust colors, tone, and language (EN, FR, ES, DE, PL, AR) to match your brand identity.",
        },
        s4: Card {
            title: "Go live (Immediate)",
            desc: "The assistant starts processing requests, booking appointments, or closing sales.",
        },
    },
    cta: Cta {
        kicker: "READY",
        title: "Put a conversation layer on your site.",
        subtitle: "One assistant for commerce, bookings, and support. Modular, multilingual, and white-label.",
        primary: "Talk to us",
        secondary: "Back to top",
    },
    chat: Chat {
        assistant: "ILNAJ Assistant",
        online: "Online",
        proactive: "Need help booking an appointment?",
        user: "Yes, Tuesday at 3pm",
        ai_response: "Perfect! Booked for Feb 18 at 3:00 PM. Confirmation sent \u{2713}",
        minimized: "Booked \u{2713}",
        chat: "Chat",
    },
    live_chat: LiveChat {
        starting: "Starting conversation...",
        m1: "Hi! How can I help you today?",
        m2: "I need to book an appointment",
        m3: "Of course! What day works for you?",
        m4: "Tomorrow at 3pm",
        m5: "Perfect! Let me confirm that...",
        quick_book: "Book now",
        quick_slots: "View slots",
    },
};

static ES: Translations = Translations {
    nav: Nav {
        features: "Cómo funciona",
        integration: "Integración",
        steps: "Pasos",
        talk: "Habla con nosotros",
        action: "Ver en acción",
    },
    hero: Hero {
        title: "Tus clientes reservan, compran y reciben ayuda. Mientras duermes.",
        subtitle: "ILNAJ despliega asistentes conversacionales inteligentes en su sitio web. Ventas, citas y soporte - automatizados con precisión.",
        cta_primary: "Ver en acción",
        cta_secondary: "Habla con nosotros",
        badge1: "Disponible en funcionamiento continuo",
        badge2: "Multilingüe nativo",
        badge3: "Marca blanca completa",
    },
    features: Features {
        kicker: "CÓMO FUNCIONA ILNAJ",
        title: "Tres procesos de negocio. Un asistente.",
        subtitle: "Diseñado para el comercio, las reservas y el soporte - modular, adaptable a la marca y siempre activo.",
        card1: Card {
            title: "Comercio automatizado",
            desc: "El asistente presenta su catálogo, verifica el inventario en tiempo real y genera enlaces de pago de Stripe. Las compras se completan sin intervención manual.",
        },
        card2: Card {
            title: "Gestión de citas",
            desc: "Los clientes eligen su franja horaria, el asistente sincroniza su Google Calendar y envía confirmaciones. Funciona 24/7, incluso fines de semana.",
        },
        card3: Card {
            title: "Soporte inteligente",
            desc: "Responde preguntas frecuentes basadas en su documentación (Google Sheets/CSV) y detalles del producto. Escala a correo o teléfono cuando se necesita juicio humano.",
        },
    },
    integration: Integration {
        kicker: "TÉCNICO",
        title: "Invisible por diseño",
        subtitle: "ILNAJ se integra en su sitio web con una sola línea de código. Sin conflictos, sin complejidad - solo un widget que funciona en todas partes (WordPress, Shopify, Wix, Custom).",
        badge1: "6+ Idiomas Nativos",
        badge2: "Se adapta a su marca",
        badge3: "Efecto de escritura realista",
    },
    device: Device {
        kicker: "VISTA PREVIA",
        title: "Una micro-conversación en vivo en bucle.",
        subtitle: "Los visitantes entienden el flujo en segundos: ayuda proactiva, intención estructurada y un resultado claro.",
        cta: "Habla con nosotros",
        steps: "Ver pasos de configuración",
        can_do: "Lo que puede hacer",
        badge_chat: "Soporte de Chat",
        badge_booking: "Reservar Citas",
        badge_payments: "Procesar Pagos",
        badge_always_on: "24/7 Disponible",
        stat_active: "Activo",
        stat_workload: "Carga",
        stat_leads: "Leads",
        stat_response: "Respuesta",
    },
    steps: Steps {
        kicker: "INSTALACIÓN",
        title: "De un fragmento a un asistente en vivo.",
        subtitle: "Cuatro pasos, diseñados para no estorbar.",
        s1: Card {
            title: "Instalación (2 min)",
            desc: "Copie una línea de código. Compatible con todos los entornos web incluyendo WordPress y Shopify.",
        },
        s2: Card {
            title: "Configuración de negocio (5 min)",
            desc: "Ingrese sus servicios, precios y disponibilidad. El asistente memoriza su catálogo al instante.",
        },
        s3: Card {
            title: "Personalización (3 min)",
            desc: "Ajuste colores, tono e idioma (EN, FR, ES, DE, PL, AR) para que coincidan con su identidad de marca.",
        },
        s4: Card {
            title: "Puesta en marcha (Inmediata)",
            desc: "El asistente comienza a procesar solicitudes, reservar citas o cerrar ventas.",
        },
    },
    cta: Cta {
        kicker: "LISTO",
        title: "Ponga una capa de conversación en su sitio.",
        subtitle: "Un asistente para comercio, reservas y soporte. Modular, multilingüe y marca blanca.",
        primary: "Habla con nosotros",
        secondary: "Volver arriba",
    },
    chat: Chat {
        assistant: "Asistente ILNAJ",
        online: "En línea",
        proactive: "¿Necesita ayuda para reservar una cita?",
        user: "Sí, el martes a las 15:00",
        ai_response: "¡Perfecto! Reservado para el 18 de febrero a las 15:00. Confirmación enviada \u{2713}",
        minimized: "Reservado \u{2713}",
        chat: "Chat",
    },
    live_chat: LiveChat {
        starting: "Iniciando conversación...",
        m1: "¡Hola! ¿Cómo puedo ayudarte hoy?",
        m2: "Necesito reservar una cita",
        m3: "¡Por supuesto! ¿Qué día te funciona?",
        m4: "Mañana a las 3pm",
        m5: "¡Perfecto! Déjame confirmar...",
        quick_book: "Reservar ahora",
        quick_slots: "Ver horarios",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lang_round_trip() {
        assert_eq!(Lang::from_str(Lang::En.as_str()), Lang::En);
        assert_eq!(Lang::from_str(Lang::Es.as_str()), Lang::Es);
        // Unknown tags fall back to English.
        assert_eq!(Lang::from_str("fr"), Lang::En);
    }

    #[test]
    fn test_toggle_alternates() {
        assert_eq!(Lang::En.toggled(), Lang::Es);
        assert_eq!(Lang::Es.toggled(), Lang::En);
    }

    #[test]
    fn test_lookup_is_total_and_non_empty() {
        for lang in [Lang::En, Lang::Es] {
            let t = translations(lang);
            assert!(!t.hero.title.is_empty());
            assert!(!t.chat.proactive.is_empty());
            assert!(!t.live_chat.m1.is_empty());
            assert!(!t.steps.s4.desc.is_empty());
        }
    }

    #[test]
    fn test_languages_differ() {
        assert_ne!(
            translations(Lang::En).hero.title,
            translations(Lang::Es).hero.title
        );
    }
}
