pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub points: &'static [&'static str],
}

pub struct Agent {
    pub name: &'static str,
    pub role: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub accent: &'static str,
}

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        icon: "⚙️",
        title: "Workflow Automation",
        summary: "We map the repetitive parts of your operations and hand them to software that never gets bored.",
        points: &["Process audits", "Integrations with the tools you already use", "Human-in-the-loop approvals"],
    },
    Service {
        icon: "🤖",
        title: "Custom AI Agents",
        summary: "Purpose-built agents that read, decide and act inside your systems with clear guardrails.",
        points: &["Email and ticket triage", "Document extraction", "Scheduling and follow-ups"],
    },
    Service {
        icon: "📊",
        title: "Data & Reporting",
        summary: "Pipelines that turn scattered spreadsheets into reports your team actually opens.",
        points: &["Automated dashboards", "Weekly digests", "Anomaly alerts"],
    },
    Service {
        icon: "🧭",
        title: "AI Strategy",
        summary: "A practical roadmap: what to automate first, what to leave alone and what it will cost.",
        points: &["Opportunity workshops", "Vendor selection", "Team training"],
    },
];

pub const AGENTS: &[Agent] = &[
    Agent {
        name: "Inbox Agent",
        role: "Support triage",
        description: "Reads every incoming message, drafts replies for the easy ones and routes the rest to the right person.",
        tags: &["Email", "Helpdesk", "Drafting"],
        accent: "#7EB2FF",
    },
    Agent {
        name: "Ledger Agent",
        role: "Back office",
        description: "Pulls invoices out of attachments, matches them against orders and flags anything that does not add up.",
        tags: &["Invoices", "OCR", "Reconciliation"],
        accent: "#9B7BFF",
    },
    Agent {
        name: "Pipeline Agent",
        role: "Sales ops",
        description: "Keeps the CRM honest: enriches new leads, logs calls and nudges deals that have gone quiet.",
        tags: &["CRM", "Enrichment", "Reminders"],
        accent: "#4FE3C1",
    },
];

pub const STATS: &[Stat] = &[
    Stat { value: "40+", label: "automations shipped" },
    Stat { value: "12k", label: "hours saved per year" },
    Stat { value: "3 wk", label: "typical first delivery" },
];

pub const ABOUT: &[&str] = &[
    "Brightwire is a small team of engineers who have spent years building software for operations-heavy businesses. We started automating our own busywork and never stopped.",
    "We work in short, fixed-scope projects. You see a working agent in the first few weeks, and you own everything we build.",
];
