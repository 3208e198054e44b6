// File: src/content/builtin.rs
// Purpose: Portfolio content compiled into the binary

use super::{CaseStudy, GlanceItem, Hero, HomePage, ProjectCard, SiteContent};
use crate::section::{SectionBody, SectionDefinition, SectionTone};

pub(super) fn site() -> SiteContent {
    SiteContent {
        home: home(),
        project_a: project_a(),
        project_b: project_b(),
        project_c: project_c(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn glance() -> Vec<GlanceItem> {
    [
        ("Role", "PM"),
        ("Timeline", "XX weeks"),
        ("Team", "Eng + Design + Data"),
        ("Scope", "Feature / System"),
    ]
    .into_iter()
    .map(|(label, value)| GlanceItem {
        label: label.to_string(),
        value: value.to_string(),
    })
    .collect()
}

fn home() -> HomePage {
    let projects = vec![
        ProjectCard {
            title: "EV Energy Rewards — Enrollment & Incentives".to_string(),
            blurb: "Modular enrollment platform and incentive dashboard that lifted conversion and cut post-enrollment churn.".to_string(),
            route: "/projects/project-a".to_string(),
            tags: strings(&["Activation", "Retention", "Integrations"]),
            accent: false,
        },
        ProjectCard {
            title: "Bronco Overland Adventures — 0→1 Booking".to_string(),
            blurb: "A new booking platform, launched end to end, with high satisfaction and early revenue validation.".to_string(),
            route: "/projects/project-b".to_string(),
            tags: strings(&["0→1", "Discovery", "Monetization"]),
            accent: true,
        },
        ProjectCard {
            title: "Ford.com + EV Routing — Experience Optimization".to_string(),
            blurb: "Iterative homepage and routing improvements that raised satisfaction and trip accuracy.".to_string(),
            route: "/projects/project-c".to_string(),
            tags: strings(&["Experimentation", "UX", "Scale"]),
            accent: false,
        },
    ];

    HomePage {
        hero: Hero {
            headline: "Hi! I'm Dyuti Chakravarthy,".to_string(),
            tagline: "A Product Manager focused on growth, trust, and long-term engagement.".to_string(),
            summary: "Product Manager building 0→1 and growth-stage EV and energy platforms. \
                      I drive conversion, retention and revenue through user-led discovery, \
                      crisp experimentation and platform integrations across B2B2C ecosystems."
                .to_string(),
            primary_action_anchor: "projects".to_string(),
        },
        sections: vec![
            SectionDefinition::new("Projects", "projects", SectionBody::Projects(projects)),
            SectionDefinition::new(
                "Experience",
                "experience",
                "Ford Motor Company, EV and energy platforms: a progression from product design \
                 to APM to PM, always aimed at adoption, engagement and trust for connected \
                 experiences, combining rigorous discovery with measurable delivery.",
            ),
            SectionDefinition::new(
                "Education",
                "education",
                "Degree, program and certifications: product analytics, experiment design and \
                 user research.",
            ),
            SectionDefinition::new("Contact", "cta", SectionBody::Contact),
        ],
    }
}

fn project_a() -> CaseStudy {
    CaseStudy {
        title: "EV Energy Rewards — Enrollment & Incentives".to_string(),
        subtitle: "Improving enrollment conversion while reducing churn by fixing blockers and scaling market expansion.".to_string(),
        meta: strings(&["Activation", "Retention", "Integrations", "Experimentation"]),
        hero_image_hint: "Add a hero image (dashboard, flow, or product screenshot)".to_string(),
        at_a_glance: glance(),
        sections: vec![
            SectionDefinition::new(
                "Background",
                "background",
                "EV owners could enroll in utility programs that reward off-peak charging, but \
                 the enrollment path spanned several partners and lost people at every handoff.",
            )
            .with_tone(SectionTone::SolidCream)
            .with_image_hint("Add program map: user → enrollment → partner → incentives"),
            SectionDefinition::new(
                "Customer Problem",
                "problem",
                "Customers did not know whether they were eligible, what they would earn, or \
                 why enrollment stalled after they had started.",
            ),
            SectionDefinition::new(
                "Business Value",
                "value",
                "Every completed enrollment is recurring incentive revenue and a stickier \
                 relationship with the vehicle owner.",
            )
            .with_tone(SectionTone::SolidCream),
            SectionDefinition::new(
                "Insights & Diagnosis",
                "insights",
                "Funnel analysis and interviews pointed at three blockers: unclear eligibility, \
                 slow partner verification and invisible incentive progress.",
            ),
            SectionDefinition::new(
                "Solution Overview",
                "solution",
                "A modular enrollment flow with upfront eligibility checks and an incentive \
                 dashboard showing earnings as they accrue.",
            )
            .with_tone(SectionTone::SolidMauve)
            .with_image_hint("Add: before/after enrollment flow + incentive dashboard placeholder"),
            SectionDefinition::new(
                "Experimentation & Rollout",
                "experiment",
                "Changes shipped behind experiments, one market at a time, with guardrail \
                 metrics on support volume and drop-off.",
            )
            .with_tone(SectionTone::SolidCream),
            SectionDefinition::new(
                "Results",
                "results",
                "Enrollment conversion went up and post-enrollment churn went down across the \
                 expanded markets.",
            )
            .with_image_hint("Add a simple before/after funnel + churn trend"),
            SectionDefinition::new(
                "What I'd Do Next",
                "next",
                "Reduce the remaining friction with progressive disclosure, keep engagement up \
                 with milestone nudges, and scale expansion with self-serve partner onboarding.",
            )
            .with_tone(SectionTone::SolidMauve)
            .full_bleed(),
        ],
    }
}

fn project_b() -> CaseStudy {
    CaseStudy {
        title: "Bronco Overland Adventures — 0→1 Booking Platform".to_string(),
        subtitle: "Launching a new booking experience end to end and validating revenue with a customer-first rollout.".to_string(),
        meta: strings(&["0→1", "Discovery", "Monetization", "Delivery"]),
        hero_image_hint: "Add booking flow or marketplace layout".to_string(),
        at_a_glance: glance(),
        sections: vec![
            SectionDefinition::new(
                "Background",
                "background",
                "Owners wanted guided off-road experiences, but there was no way to discover \
                 and book them in one place.",
            )
            .with_image_hint("Add: marketplace browse → checkout flow"),
            SectionDefinition::new(
                "Customer Problem",
                "problem",
                "Booking meant phone calls and email chains, with no reviews or clear pricing \
                 to build confidence.",
            ),
            SectionDefinition::new(
                "Business Value",
                "value",
                "A direct booking channel creates a new revenue line and deepens brand loyalty.",
            )
            .with_tone(SectionTone::SolidCream),
            SectionDefinition::new(
                "Constraints & Stakeholders",
                "constraints",
                "Outfitter partners, legal review and a fixed launch season shaped the scope \
                 of the first release.",
            ),
            SectionDefinition::new(
                "Solution",
                "solution",
                "A branded marketplace with reviews, transparent pricing and a short checkout.",
            )
            .with_tone(SectionTone::SolidMauve)
            .with_image_hint("Add: reviews component + branded layout placeholder"),
            SectionDefinition::new(
                "Results",
                "results",
                "The pilot validated revenue early and kept customer satisfaction high.",
            )
            .with_image_hint("Add: revenue trend + CSAT snapshot"),
        ],
    }
}

fn project_c() -> CaseStudy {
    CaseStudy {
        title: "Ford.com + EV Routing — Experience Optimization".to_string(),
        subtitle: "Improving satisfaction and accuracy at scale through research-led iteration and test-driven delivery.".to_string(),
        meta: strings(&["Experimentation", "UX", "Scale", "Quality"]),
        hero_image_hint: "Add homepage experiment or routing accuracy dashboard".to_string(),
        at_a_glance: glance(),
        sections: vec![
            SectionDefinition::new(
                "Background",
                "background",
                "The homepage and EV trip planner serve millions of visits, so small issues \
                 carry a large cost.",
            ),
            SectionDefinition::new(
                "Customer Problem",
                "problem",
                "Visitors struggled to find what they came for, and route plans missed \
                 charging stops on edge cases.",
            )
            .with_tone(SectionTone::SolidMauve)
            .with_image_hint("Add: annotated homepage + edge-case routing examples"),
            SectionDefinition::new(
                "Business Value",
                "value",
                "Better satisfaction and trustworthy routing protect EV adoption and reduce \
                 support load.",
            )
            .with_tone(SectionTone::SolidCream),
            SectionDefinition::new(
                "Approach",
                "approach",
                "Research-led hypotheses, A/B tests on the homepage and a regression suite for \
                 routing edge cases.",
            ),
            SectionDefinition::new(
                "Results",
                "results",
                "Satisfaction rose and routing accuracy reached its target.",
            )
            .with_image_hint("Add: CSAT chart + routing accuracy trend"),
        ],
    }
}
