//! Static fallback data shown when a collection fails to load or is empty.

use crate::types::{Highlight, Integration, KnowledgeEntry, MonthlyReport, ToolEntry};

fn knowledge(id: &str, title: &str, description: &str, category: &str, tags: &[&str]) -> KnowledgeEntry {
    KnowledgeEntry {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        category: Some(category.to_string()),
        tags: tags.iter().map(ToString::to_string).collect(),
        url: None,
        read_minutes: Some(5),
        created_at: None,
    }
}

pub fn knowledge_entries() -> Vec<KnowledgeEntry> {
    vec![
        knowledge(
            "sample-getting-started",
            "Getting Started Guide",
            "Set up your dashboard, invite your team and connect your first service.",
            "Guides",
            &["onboarding"],
        ),
        knowledge(
            "sample-optimize-images",
            "Optimize Images",
            "Compress and resize every image so pages load fast on mobile.",
            "Guides",
            &["performance", "media"],
        ),
        knowledge(
            "sample-seo-basics",
            "SEO Basics",
            "Titles, meta descriptions and image alt text that search engines reward.",
            "Marketing",
            &["seo"],
        ),
        knowledge(
            "sample-domain-setup",
            "Connecting Your Domain",
            "Point your DNS records at Trovolio hosting and enable HTTPS.",
            "Hosting",
            &["dns", "ssl"],
        ),
        knowledge(
            "sample-crm-pipeline",
            "Managing Your CRM Pipeline",
            "Track leads from first contact to signed deal.",
            "CRM",
            &["sales"],
        ),
        knowledge(
            "sample-reading-reports",
            "Reading Your Monthly Report",
            "What each traffic and conversion metric means for your business.",
            "Reports",
            &["analytics"],
        ),
    ]
}

fn report(id: &str, title: &str, period: &str, summary: &str, visits: u64, leads: u64) -> MonthlyReport {
    MonthlyReport {
        id: id.to_string(),
        title: title.to_string(),
        period: period.to_string(),
        summary: summary.to_string(),
        category: Some("Performance".to_string()),
        visits: Some(visits),
        leads: Some(leads),
        conversion_rate: None,
        report_url: None,
        created_at: None,
    }
}

pub fn monthly_reports() -> Vec<MonthlyReport> {
    vec![
        report(
            "sample-report-3",
            "Quarter Close Summary",
            "2026-03",
            "Organic traffic grew steadily after the landing page refresh.",
            4_820,
            61,
        ),
        report(
            "sample-report-2",
            "February Performance",
            "2026-02",
            "Paid campaigns paused; referral traffic held steady.",
            3_910,
            44,
        ),
        report(
            "sample-report-1",
            "January Performance",
            "2026-01",
            "New site launched and indexed.",
            2_750,
            29,
        ),
    ]
}

fn integration(id: &str, name: &str, description: &str, category: &str) -> Integration {
    Integration {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category: Some(category.to_string()),
        enabled: false,
        last_synced_at: None,
        updated_at: None,
    }
}

pub fn integrations() -> Vec<Integration> {
    vec![
        integration("google-analytics", "Google Analytics", "Traffic and conversion tracking.", "Analytics"),
        integration("slack", "Slack", "Lead and uptime notifications in your channels.", "Communication"),
        integration("mailchimp", "Mailchimp", "Sync new contacts to your mailing lists.", "Marketing"),
        integration("stripe", "Stripe", "Accept card payments on your site.", "Payments"),
    ]
}

fn tool(id: &str, name: &str, description: &str, category: &str, is_new: bool) -> ToolEntry {
    ToolEntry {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category: Some(category.to_string()),
        url: None,
        is_new,
    }
}

pub fn tools() -> Vec<ToolEntry> {
    vec![
        tool("qr-generator", "QR Code Generator", "Branded QR codes for print and packaging.", "Marketing", false),
        tool("website-builder", "Website Builder", "Generate a landing page from a short brief.", "Web", true),
        tool("seo-audit", "SEO Audit", "Scan a page for missing tags and slow assets.", "Marketing", false),
        tool("uptime-monitor", "Uptime Monitor", "Get alerted when your site goes down.", "Hosting", false),
    ]
}

fn highlight(title: &str, description: &str, stat: &str) -> Highlight {
    Highlight {
        title: title.to_string(),
        description: description.to_string(),
        stat: Some(stat.to_string()),
    }
}

/// "Why Choose Us" entries. These are static copy, never fetched.
pub fn highlights() -> Vec<Highlight> {
    vec![
        highlight("Fast Delivery", "Most sites go live within two weeks.", "14 days"),
        highlight("Always On", "Managed hosting with continuous monitoring.", "99.9%"),
        highlight("Real Reporting", "Monthly reports in plain language.", "12/yr"),
        highlight("One Team", "Design, hosting and marketing under one roof.", "1 contact"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use trovolio_core::{FilterState, filter_items};

    #[test]
    fn test_six_knowledge_entries() {
        assert_eq!(knowledge_entries().len(), 6);
    }

    #[test]
    fn test_sample_ids_are_unique() {
        let ids: HashSet<_> = knowledge_entries().into_iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), 6);
        let ids: HashSet<_> = integrations().into_iter().map(|i| i.id).collect();
        assert_eq!(ids.len(), integrations().len());
    }

    #[test]
    fn test_guides_image_finds_optimize_images() {
        let found = filter_items(&knowledge_entries(), &FilterState::new("image", "Guides"));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Optimize Images");
    }

    #[test]
    fn test_uppercase_query_matches_title() {
        let found = filter_items(&knowledge_entries(), &FilterState::new("GUIDE", "All"));
        assert!(found.iter().any(|e| e.title == "Getting Started Guide"));
    }

    #[test]
    fn test_reports_are_newest_first() {
        let periods: Vec<_> = monthly_reports().into_iter().map(|r| r.period).collect();
        let mut sorted = periods.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(periods, sorted);
    }
}
