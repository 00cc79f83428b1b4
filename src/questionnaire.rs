//! The fixed 54-statement question table

use crate::{Dimension, Polarity, Question};
use Dimension::{AT, EI, JP, SN, TF};
use Polarity::{Negative as NEG, Positive as POS};

/// Points a single strongly-agree/disagree answer can move a dimension
pub const MAX_CONTRIBUTION: i32 = 10;

pub const TOTAL_QUESTIONS: usize = 54;

/// Questions in presentation order. Order matters: responses are matched
/// to statements by position.
pub static QUESTIONS: [Question; TOTAL_QUESTIONS] = [
    // Extraversion (E) vs Introversion (I)
    Question::new("You feel comfortable just walking up to someone you find interesting and striking up a conversation.", EI, POS),
    Question::new("You rarely worry about whether you make a good impression on people you meet.", EI, POS),
    Question::new("You enjoy participating in team-based activities.", EI, POS),
    Question::new("You enjoy solitary hobbies or activities more than group ones.", EI, NEG),
    Question::new("You usually wait for others to introduce themselves first at social gatherings.", EI, NEG),
    Question::new("You usually prefer to be around others rather than on your own.", EI, POS),
    Question::new("Your friends would describe you as lively and outgoing.", EI, POS),
    Question::new("You avoid making phone calls.", EI, NEG),
    Question::new("You can easily connect with people you have just met.", EI, POS),
    Question::new("You would love a job that requires you to work alone most of the time.", EI, NEG),
    Question::new("You feel more drawn to busy, bustling atmospheres than to quiet, intimate places.", EI, POS),
    // Sensing (S) vs Intuition (N)
    Question::new("You are not too interested in discussions about various interpretations of creative works.", SN, POS),
    Question::new("You enjoy experimenting with new and untested approaches.", SN, NEG),
    Question::new("You actively seek out new experiences and knowledge areas to explore.", SN, NEG),
    Question::new("You cannot imagine yourself writing fictional stories for a living.", SN, POS),
    Question::new("You become bored or lose interest when the discussion gets highly theoretical.", SN, POS),
    Question::new("You are drawn to various forms of creative expression, such as writing.", SN, NEG),
    Question::new("You enjoy exploring unfamiliar ideas and viewpoints.", SN, NEG),
    Question::new("You are not too interested in discussing theories on what the world could look like in the future.", SN, POS),
    Question::new("You believe that pondering abstract philosophical questions is a waste of time.", SN, POS),
    Question::new("You prefer tasks that require you to come up with creative solutions rather than follow concrete steps.", SN, NEG),
    Question::new("You enjoy debating ethical dilemmas.", SN, NEG),
    // Thinking (T) vs Feeling (F)
    Question::new("People's stories and emotions speak louder to you than numbers or data.", TF, NEG),
    Question::new("You prioritize facts over people's feelings when determining a course of action.", TF, POS),
    Question::new("You prioritize being sensitive over being completely honest.", TF, NEG),
    Question::new("You favor efficiency in decisions, even if it means disregarding some emotional aspects.", TF, POS),
    Question::new("In disagreements, you prioritize proving your point over preserving the feelings of others.", TF, POS),
    Question::new("You are not easily swayed by emotional arguments.", TF, POS),
    Question::new("When facts and feelings conflict, you usually find yourself following your heart.", TF, NEG),
    Question::new("You usually base your choices on objective facts rather than emotional impressions.", TF, POS),
    Question::new("When making decisions, you focus more on how the affected people might feel than on what is most logical or efficient.", TF, NEG),
    Question::new("If a decision feels right to you, you often act on it without needing further proof.", TF, NEG),
    Question::new("You are more likely to rely on emotional intuition than logical reasoning when making a choice.", TF, NEG),
    // Judging (J) vs Perceiving (P)
    Question::new("You prioritize and plan tasks effectively, often completing them well before the deadline.", JP, POS),
    Question::new("You like to use organizing tools like schedules and lists.", JP, POS),
    Question::new("You often allow the day to unfold without any schedule at all.", JP, NEG),
    Question::new("You prefer to do your chores before allowing yourself to relax.", JP, POS),
    Question::new("You often end up doing things at the last possible moment.", JP, NEG),
    Question::new("You find it challenging to maintain a consistent work or study schedule.", JP, NEG),
    Question::new("You like to have a to-do list for each day.", JP, POS),
    Question::new("If your plans are interrupted, your top priority is to get back on track as soon as possible.", JP, POS),
    Question::new("Your personal work style is closer to spontaneous bursts of energy than organized and consistent efforts.", JP, NEG),
    Question::new("You complete things methodically without skipping over any steps.", JP, POS),
    Question::new("You struggle with deadlines.", JP, NEG),
    // Assertive (A) vs Turbulent (T)
    Question::new("Even a small mistake can cause you to doubt your overall abilities and knowledge.", AT, NEG),
    Question::new("You are prone to worrying that things will take a turn for the worse.", AT, NEG),
    Question::new("Your mood can change very quickly.", AT, NEG),
    Question::new("You rarely second-guess the choices that you have made.", AT, POS),
    Question::new("You rarely feel insecure.", AT, POS),
    Question::new("You are still bothered by mistakes that you made a long time ago.", AT, NEG),
    Question::new("Your emotions control you more than you control them.", AT, NEG),
    Question::new("When someone thinks highly of you, you wonder how long it will take them to feel disappointed in you.", AT, NEG),
    Question::new("You often feel overwhelmed.", AT, NEG),
    Question::new("You feel confident that things will work out for you.", AT, POS),
];

/// Number of statements in `questions` that belong to `dimension`
pub fn count_for(questions: &[Question], dimension: Dimension) -> usize {
    questions.iter().filter(|q| q.dimension == dimension).count()
}

/// Largest absolute score a dimension can reach
pub fn max_score_for(questions: &[Question], dimension: Dimension) -> i32 {
    count_for(questions, dimension) as i32 * MAX_CONTRIBUTION
}
