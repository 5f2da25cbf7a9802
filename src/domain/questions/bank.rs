//! Question bank builder.

use serde::Serialize;
use tracing::{debug, info};

use super::{ChartData, ComparisonFamily, ComparisonQuestion, EstimationQuestion};
use crate::domain::analysis::{Aggregator, CountOptions, GroupSelection, Predicate};
use crate::domain::foundation::Percentage;
use crate::domain::survey::taxonomy::{
    AiUsageFrequency, ManagementLevel, OrgSize, TeamGrowth, AI_ADOPTION_INTERNAL_PLATFORMS,
    BOTTLENECK_DATA_QUALITY, BOTTLENECK_LEADERSHIP, BOTTLENECK_LEGACY, BOTTLENECK_REQUIREMENTS,
    BOTTLENECK_TALENT, INDUSTRY_HEALTHCARE, INDUSTRY_MANUFACTURING, MODELING_AD_HOC,
    MODELING_GOING_WELL, NO_ORCHESTRATION,
};
use crate::domain::survey::{Dataset, Dimension};

const GROWTH_BOTTLENECKS: [&str; 5] = [
    BOTTLENECK_LEGACY,
    BOTTLENECK_LEADERSHIP,
    BOTTLENECK_TALENT,
    BOTTLENECK_DATA_QUALITY,
    BOTTLENECK_REQUIREMENTS,
];

const TOP_BOTTLENECKS: usize = 7;

/// All questions derived from one dataset.
///
/// Built once and shared read-only; sessions refer to questions by index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QuestionBank {
    comparisons: Vec<ComparisonQuestion>,
    estimations: Vec<EstimationQuestion>,
}

impl QuestionBank {
    /// Builds every comparison family and estimation fact from `dataset`.
    ///
    /// Deterministic: the same dataset always yields the same bank. Groups
    /// with no respondents are left out of comparison families.
    pub fn build(dataset: &Dataset) -> Self {
        let comparisons: Vec<ComparisonQuestion> = comparison_families(dataset)
            .iter()
            .flat_map(|family| {
                let questions = family.questions();
                debug!(
                    category = %family.category,
                    groups = family.chart.len(),
                    questions = questions.len(),
                    "Comparison family built"
                );
                questions
            })
            .collect();
        let estimations = estimation_questions(dataset);

        info!(
            respondents = dataset.respondent_count(),
            comparisons = comparisons.len(),
            estimations = estimations.len(),
            "Question bank built"
        );

        Self {
            comparisons,
            estimations,
        }
    }

    /// Assembles a bank from prepared questions.
    pub fn from_parts(
        comparisons: Vec<ComparisonQuestion>,
        estimations: Vec<EstimationQuestion>,
    ) -> Self {
        Self {
            comparisons,
            estimations,
        }
    }

    pub fn comparisons(&self) -> &[ComparisonQuestion] {
        &self.comparisons
    }

    pub fn estimations(&self) -> &[EstimationQuestion] {
        &self.estimations
    }

    pub fn comparison(&self, index: usize) -> Option<&ComparisonQuestion> {
        self.comparisons.get(index)
    }

    pub fn estimation(&self, index: usize) -> Option<&EstimationQuestion> {
        self.estimations.get(index)
    }
}

// ─────────────────────────────────────────────────────────────────────────
// Comparison families
// ─────────────────────────────────────────────────────────────────────────

fn comparison_families(dataset: &Dataset) -> Vec<ComparisonFamily> {
    let fires = Predicate::is_true(Dimension::FightsFires);
    let org_sizes = GroupSelection::listed(OrgSize::labels().iter().copied());

    vec![
        family(
            dataset,
            Dimension::Industry,
            GroupSelection::AllSorted,
            &fires,
            "Fires × Industry",
            "teams report fighting fires",
            "Fire-fighting rate by Industry",
        ),
        family(
            dataset,
            Dimension::Industry,
            GroupSelection::AllSorted,
            &Predicate::equals(Dimension::ModelingApproach, MODELING_AD_HOC),
            "Modeling × Industry",
            "use ad-hoc modeling",
            "Ad-hoc modeling by Industry",
        ),
        family(
            dataset,
            Dimension::Bottleneck,
            GroupSelection::listed(GROWTH_BOTTLENECKS),
            &grows(),
            "Growth × Bottleneck",
            "expect their team to grow in 2026",
            "% expecting growth, by bottleneck",
        ),
        family(
            dataset,
            Dimension::OrgSize,
            org_sizes.clone(),
            &Predicate::equals(Dimension::Orchestration, NO_ORCHESTRATION),
            "Orchestration × Org Size",
            "have no orchestration",
            "No orchestration rate by Org Size",
        ),
        family(
            dataset,
            Dimension::Management,
            GroupSelection::listed(ManagementLevel::labels().iter().copied()),
            &lacks_leadership(),
            "Self-awareness",
            "cite \"Lack of leadership\" as bottleneck",
            "Leadership bottleneck: Mgmt vs IC",
        ),
        family(
            dataset,
            Dimension::Industry,
            GroupSelection::AllSorted,
            &daily_ai(),
            "AI Usage × Industry",
            "use AI tools daily or more",
            "Daily+ AI usage by Industry",
        ),
        family(
            dataset,
            Dimension::OrgSize,
            org_sizes,
            &fires,
            "Fires × Org Size",
            "teams report fighting fires",
            "Fire-fighting rate by Org Size",
        ),
    ]
}

fn family(
    dataset: &Dataset,
    group_dimension: Dimension,
    selection: GroupSelection,
    predicate: &Predicate,
    category: &str,
    context: &str,
    title: &str,
) -> ComparisonFamily {
    let present = dataset.distinct_values(group_dimension);
    let stats: Vec<_> = Aggregator::rate_by(dataset, group_dimension, selection, predicate)
        .into_iter()
        .filter(|stat| present.contains(&stat.key))
        .collect();
    ComparisonFamily::new(category, context, ChartData::from_stats(title, &stats))
}

// ─────────────────────────────────────────────────────────────────────────
// Estimation facts
// ─────────────────────────────────────────────────────────────────────────

fn estimation_questions(dataset: &Dataset) -> Vec<EstimationQuestion> {
    let fires = Predicate::is_true(Dimension::FightsFires);
    let fires_by_industry = rate_chart(
        dataset,
        Dimension::Industry,
        GroupSelection::AllSorted,
        &fires,
        "Fire-fighting rate by Industry",
    );
    let ad_hoc = Predicate::equals(Dimension::ModelingApproach, MODELING_AD_HOC);
    let no_orchestration = Predicate::equals(Dimension::Orchestration, NO_ORCHESTRATION);
    let shrinks = Predicate::equals(Dimension::TeamGrowth, TeamGrowth::Shrink.label());

    let ai_chart = AiUsageFrequency::ALL.iter().fold(
        ChartData::new("AI Usage Frequency (all respondents)"),
        |chart, frequency| {
            let share = Aggregator::share(
                dataset,
                &Predicate::equals(Dimension::AiUsageFrequency, frequency.label()),
            );
            chart.with_bar(frequency.short_label(), share)
        },
    );

    let bottleneck_chart = ChartData::from_stats(
        "Top bottlenecks (all respondents)",
        &Aggregator::count_distinct(dataset, Dimension::Bottleneck, &CountOptions::top(TOP_BOTTLENECKS)),
    )
    .with_highlight(BOTTLENECK_LEGACY);

    let orchestration_chart = OrgSize::ALL.iter().fold(
        ChartData::new("No orchestration rate by Org Size"),
        |chart, size| {
            chart.with_bar(
                size.short_label(),
                rate_in(dataset, Dimension::OrgSize, size.label(), &no_orchestration),
            )
        },
    )
    .with_highlight(OrgSize::Over10000.short_label());

    let pain_point_chart = ChartData::from_stats(
        "Modeling pain points (multi-select)",
        &Aggregator::count_distinct(dataset, Dimension::ModelingPainPoint, &CountOptions::default()),
    )
    .with_highlight(MODELING_GOING_WELL);

    vec![
        EstimationQuestion::new(
            "AI Adoption",
            "What % of data professionals use AI tools daily or more?",
            Aggregator::share(dataset, &daily_ai()),
            ai_chart,
        )
        .with_hint("Think about ChatGPT, Copilot, Claude adoption...")
        .with_reveal("AI is table stakes. Only 1% never use AI tools at all."),
        EstimationQuestion::new(
            "Team Focus",
            "What % of respondents report fighting fires as a primary focus for the team?",
            Aggregator::share(dataset, &fires),
            fires_by_industry.clone(),
        )
        .with_hint("More than 1 in 5, but less than 1 in 2...")
        .with_reveal("Over a quarter of data teams spend significant time firefighting."),
        EstimationQuestion::new(
            "Challenges",
            "What % cite legacy / tech debt as their #1 bottleneck?",
            Aggregator::share(dataset, &Predicate::equals(Dimension::Bottleneck, BOTTLENECK_LEGACY)),
            bottleneck_chart,
        )
        .with_hint("It's the single biggest bottleneck in the survey.")
        .with_reveal("The #1 bottleneck, beating leadership and requirements."),
        EstimationQuestion::new(
            "Infrastructure",
            "What % of 10,000+ employee orgs have no orchestration?",
            rate_in(dataset, Dimension::OrgSize, OrgSize::Over10000.label(), &no_orchestration),
            orchestration_chart,
        )
        .with_hint("Surprisingly close to startup rates...")
        .with_reveal("Enterprise ≠ mature infrastructure. Nearly identical to startups."),
        EstimationQuestion::new(
            "Modeling",
            "What % of Healthcare orgs use ad-hoc modeling?",
            rate_in(dataset, Dimension::Industry, INDUSTRY_HEALTHCARE, &ad_hoc),
            rate_chart(
                dataset,
                Dimension::Industry,
                GroupSelection::AllSorted,
                &ad_hoc,
                "Ad-hoc modeling rate by Industry",
            )
            .with_highlight(INDUSTRY_HEALTHCARE),
        )
        .with_hint("The most regulated industries aren't always the most disciplined...")
        .with_reveal("The most regulated industry has the messiest modeling."),
        EstimationQuestion::new(
            "Modeling",
            "What % say modeling is going well (no pain points)?",
            Aggregator::share(
                dataset,
                &Predicate::equals(Dimension::ModelingPainPoint, MODELING_GOING_WELL),
            ),
            pain_point_chart,
        )
        .with_hint("Joe Reis called modeling 'in crisis'...")
        .with_reveal("Nearly 90% report at least one modeling pain point."),
        EstimationQuestion::new(
            "Industry",
            "What % of Manufacturing teams report fighting fires?",
            rate_in(dataset, Dimension::Industry, INDUSTRY_MANUFACTURING, &fires),
            fires_by_industry.with_highlight(INDUSTRY_MANUFACTURING),
        )
        .with_hint("Think factories, supply chains, legacy SCADA systems...")
        .with_reveal("Manufacturing and Finance lead in firefighting, far above Tech."),
        EstimationQuestion::new(
            "Growth",
            "What % of teams with Talent / hiring as bottleneck expect to grow?",
            rate_in(dataset, Dimension::Bottleneck, BOTTLENECK_TALENT, &grows()),
            rate_chart(
                dataset,
                Dimension::Bottleneck,
                GroupSelection::AllSorted,
                &grows(),
                "% expecting growth, by bottleneck",
            )
            .with_highlight(BOTTLENECK_TALENT),
        )
        .with_hint("If your only problem is hiring, things might be going well...")
        .with_reveal("The most bullish group. If talent is your only problem, the future is bright."),
        EstimationQuestion::new(
            "Self-awareness",
            "What % of Managers/VPs cite lack of leadership as the bottleneck?",
            rate_in(
                dataset,
                Dimension::Management,
                ManagementLevel::Management.label(),
                &lacks_leadership(),
            ),
            rate_chart(
                dataset,
                Dimension::Management,
                GroupSelection::listed(ManagementLevel::labels().iter().copied()),
                &lacks_leadership(),
                "\"Lack of leadership\" by Mgmt vs IC",
            )
            .with_highlight(ManagementLevel::Management.label()),
        )
        .with_hint("Do managers admit they're the problem?")
        .with_reveal("The self-awareness gap is only ~3pp. Managers largely agree."),
        EstimationQuestion::new(
            "AI Paradox",
            "What % of teams building AI platforms expect to shrink?",
            rate_in(dataset, Dimension::AiAdoption, AI_ADOPTION_INTERNAL_PLATFORMS, &shrinks),
            rate_chart(
                dataset,
                Dimension::AiAdoption,
                GroupSelection::AllSorted,
                &shrinks,
                "% expecting shrinkage by AI adoption",
            )
            .with_highlight(AI_ADOPTION_INTERNAL_PLATFORMS),
        )
        .with_hint("AI platforms might be replacing headcount...")
        .with_reveal(
            "Building AI platforms correlates with shrinkage, not growth. The transition costs headcount.",
        ),
    ]
}

fn rate_chart(
    dataset: &Dataset,
    group_dimension: Dimension,
    selection: GroupSelection,
    predicate: &Predicate,
    title: &str,
) -> ChartData {
    ChartData::from_stats(
        title,
        &Aggregator::rate_by(dataset, group_dimension, selection, predicate),
    )
}

/// Share of `group`'s respondents matching `predicate`; 0% for an absent group.
fn rate_in(dataset: &Dataset, dimension: Dimension, group: &str, predicate: &Predicate) -> Percentage {
    Aggregator::rate_by(dataset, dimension, GroupSelection::listed([group]), predicate)
        .first()
        .map_or(Percentage::ZERO, |stat| stat.percentage)
}

fn daily_ai() -> Predicate {
    Predicate::one_of(
        Dimension::AiUsageFrequency,
        AiUsageFrequency::ALL
            .iter()
            .filter(|f| f.is_daily_or_more())
            .map(|f| f.label()),
    )
}

fn grows() -> Predicate {
    Predicate::equals(Dimension::TeamGrowth, TeamGrowth::Grow.label())
}

fn lacks_leadership() -> Predicate {
    Predicate::equals(Dimension::Bottleneck, BOTTLENECK_LEADERSHIP)
}
