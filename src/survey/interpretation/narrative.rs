use super::domain::Category;
use super::level::ScoreLevel;

pub(crate) fn category_interpretation(category: Category, level: ScoreLevel) -> &'static str {
    use Category::*;
    use ScoreLevel::*;

    match (category, level) {
        (MentalHealthStress, Healthy) => {
            "Psychological state is currently stable. Stress is well managed and recovery is sufficient."
        }
        (MentalHealthStress, Attention) => {
            "Signs of rising stress. Workload may be increasing while rest falls short; attention is needed."
        }
        (MentalHealthStress, Risk) => {
            "Risk of chronic stress is elevated. Persistent fatigue, sleep and focus problems are showing."
        }
        (MentalHealthStress, HighRisk) => {
            "High burnout risk. Emotional exhaustion and detachment from work are present; support is required."
        }
        (WorkplaceEnvironment, Healthy) => {
            "The workplace is psychologically safe. Trust is high and communication is open."
        }
        (WorkplaceEnvironment, Attention) => {
            "Psychological safety is only partly in place. Trust and communication vary between teams."
        }
        (WorkplaceEnvironment, Risk) => {
            "Trust and communication problems are present, and unfair treatment is being felt."
        }
        (WorkplaceEnvironment, HighRisk) => {
            "The workplace is not psychologically safe. Fear, pressure and isolation are widespread."
        }
        (PersonalState, Healthy) => {
            "Strong self-awareness and self-regulation with high self-confidence."
        }
        (PersonalState, Attention) => {
            "Self-understanding fluctuates and confidence sometimes weakens."
        }
        (PersonalState, Risk) => {
            "Self-confidence is weakening and negative thoughts are hard to control."
        }
        (PersonalState, HighRisk) => {
            "Self-worth has dropped seriously; support with self-relationship is needed."
        }
        (BehaviorInteraction, Healthy) => {
            "Healthy interaction style: open with others and comfortable working in a team."
        }
        (BehaviorInteraction, Attention) => {
            "Selective interaction with a tendency to withdraw in some situations."
        }
        (BehaviorInteraction, Risk) => {
            "Avoidant or defensive tendencies; asking others for help feels uncomfortable."
        }
        (BehaviorInteraction, HighRisk) => {
            "Risky interaction pattern with strong conflict avoidance and isolation."
        }
        (OverallWellbeing, Healthy) => {
            "Wellbeing is high with good life satisfaction and work-life balance."
        }
        (OverallWellbeing, Attention) => {
            "Wellbeing fluctuates; work is starting to intrude on personal life."
        }
        (OverallWellbeing, Risk) => {
            "Wellbeing is declining and work-life balance is being lost."
        }
        (OverallWellbeing, HighRisk) => {
            "Wellbeing has dropped seriously, with low satisfaction and energy. Professional support is required."
        }
    }
}

/// Longer analysis paragraph shown alongside the short interpretation.
pub(crate) fn category_analysis(category: Category, level: ScoreLevel) -> &'static str {
    use Category::*;
    use ScoreLevel::*;

    match (category, level) {
        (MentalHealthStress, Healthy) => {
            "Analysis: psychological health is good. Stress is managed well and rest is sufficient."
        }
        (MentalHealthStress, Attention) => {
            "Analysis: stress is within normal range but has reached a warning level. Preventive steps are possible now."
        }
        (MentalHealthStress, Risk) => {
            "Analysis: stress is accumulating. Workload, time management and lack of rest are showing; sustained recovery is needed."
        }
        (MentalHealthStress, HighRisk) => {
            "Analysis: stress is intensely high, with chronic fatigue, emotional instability and poor sleep. Burnout risk is high."
        }
        (WorkplaceEnvironment, Healthy) => {
            "Analysis: the workplace is psychologically safe, with high trust, open communication and team support."
        }
        (WorkplaceEnvironment, Attention) => {
            "Analysis: the environment is generally good, but communication issues appear in places. There is room to improve."
        }
        (WorkplaceEnvironment, Risk) => {
            "Analysis: trust at work is weakening and unfair treatment is being felt. Management attention is needed."
        }
        (WorkplaceEnvironment, HighRisk) => {
            "Analysis: psychological safety is very low and trust, openness and peer support are lacking. Cultural change is urgent."
        }
        (PersonalState, Healthy) => {
            "Analysis: self-understanding and self-management are strong, confidence is high and weaknesses are acknowledged."
        }
        (PersonalState, Attention) => {
            "Analysis: self-understanding fluctuates and confidence weakens at times."
        }
        (PersonalState, Risk) => {
            "Analysis: self-confidence is weakening and recognising one's own strengths is difficult."
        }
        (PersonalState, HighRisk) => {
            "Analysis: self-worth and confidence are very low, with difficulty controlling negative thoughts and accepting change."
        }
        (BehaviorInteraction, Healthy) => {
            "Analysis: a healthy interaction style. Open with others, works well in teams and asks for help."
        }
        (BehaviorInteraction, Attention) => {
            "Analysis: interaction is selective, sometimes avoidant, but stable overall."
        }
        (BehaviorInteraction, Risk) => {
            "Analysis: a defensive interaction style, avoiding conflict and struggling with teamwork."
        }
        (BehaviorInteraction, HighRisk) => {
            "Analysis: a risky interaction style with a strong tendency to withdraw and refuse help."
        }
        (OverallWellbeing, Healthy) => {
            "Analysis: wellbeing is high, with life satisfaction, good work-life balance and plenty of energy."
        }
        (OverallWellbeing, Attention) => {
            "Analysis: wellbeing fluctuates and work-life balance is lost at times."
        }
        (OverallWellbeing, Risk) => {
            "Analysis: wellbeing has started to decline. Work overly affects personal life and rest is insufficient."
        }
        (OverallWellbeing, HighRisk) => {
            "Analysis: wellbeing has seriously deteriorated. Life satisfaction and work-life balance are lost, and energy and motivation are very low."
        }
    }
}

pub(crate) fn overall_interpretation(level: ScoreLevel) -> &'static str {
    match level {
        ScoreLevel::Healthy => {
            "Overall wellbeing is high. Psychological state, work environment and relationships are all stable."
        }
        ScoreLevel::Attention => {
            "Wellbeing is good overall but some areas need attention. Review the categories below."
        }
        ScoreLevel::Risk => {
            "Wellbeing risk is elevated. Professional advice and concrete measures are recommended."
        }
        ScoreLevel::HighRisk => {
            "Wellbeing risk is high. Professional psychological support is required."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_level_pair_has_two_distinct_texts() {
        let levels = [
            ScoreLevel::Healthy,
            ScoreLevel::Attention,
            ScoreLevel::Risk,
            ScoreLevel::HighRisk,
        ];
        for category in Category::ordered() {
            for level in levels {
                let short = category_interpretation(category, level);
                let long = category_analysis(category, level);
                assert!(!short.is_empty());
                assert!(long.starts_with("Analysis: "), "{category:?} {level:?}");
                assert_ne!(short, long);
            }
        }
    }
}
