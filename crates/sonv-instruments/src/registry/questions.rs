//! The 112 questions in presentation order. Ids are frozen: share codes and
//! stored answers refer to them by position.

use sonv_core::models::answer::QuestionId;
use sonv_core::models::scale::ScaleKey::{self, *};

use super::Question;

/// `(id, scale, subscale, reverse scored, text)`
type Row = (QuestionId, ScaleKey, Option<&'static str>, bool, &'static str);

#[rustfmt::skip]
const QUESTIONS: [Row; 112] = [
    (0, Inattention, Some("A1"), false, "I lose focus on tasks that are not interesting to me, even when they matter."),
    (1, Inattention, Some("A1"), false, "My mind drifts away during conversations, even when I want to listen."),
    (2, Inattention, Some("A1"), false, "I find it hard to stay focused on long, repetitive tasks."),
    (3, SocialDesirability, None, false, "I have never told a lie, not even a small one."),
    (4, Inattention, Some("A1"), false, "I read a page and realise I have not taken in a word of it."),
    (5, Inattention, Some("A2"), false, "I leave tasks unfinished once the initial interest fades."),
    (6, Inattention, Some("A2"), false, "I underestimate how long things will take and end up running late."),
    (7, AtypicalResponding, None, false, "I have never seen the sky."),
    (8, Inattention, Some("A2"), false, "My desk, files or inbox drift into disorder no matter how often I tidy them."),
    (9, Inattention, Some("A2"), false, "I put off starting tasks that need sustained mental effort."),
    (10, Inattention, Some("A3"), false, "I misplace everyday items such as keys, phone or wallet."),
    (11, Defensiveness, None, false, "I never forget anything."),
    (12, Inattention, Some("A3"), false, "I forget appointments or commitments unless I set reminders."),
    (13, Inattention, Some("A3"), false, "I walk into a room and forget why I came."),
    (14, Inattention, Some("A3"), false, "I make careless mistakes because I overlook details."),
    (15, Acquiescence, None, false, "I prefer to spend my evenings at home."),
    (16, Hyperactivity, Some("B1"), false, "I fidget with my hands or feet when I have to sit still."),
    (17, Hyperactivity, Some("B1"), false, "I feel an inner restlessness, as if driven by a motor."),
    (18, Hyperactivity, Some("B1"), false, "I find it hard to relax during quiet downtime."),
    (19, Hyperactivity, Some("B1"), false, "I get up or move around when I am expected to stay seated."),
    (20, Hyperactivity, Some("B1"), false, "I struggle to sit through a long meeting without feeling restless."),
    (21, Hyperactivity, Some("B2"), false, "I finish other people's sentences or answer before the question is complete."),
    (22, Hyperactivity, Some("B2"), false, "I interrupt others even when I know I should wait."),
    (23, SocialDesirability, None, false, "I have never felt irritated with anyone."),
    (24, Hyperactivity, Some("B2"), false, "I make purchases or decisions on impulse and regret them later."),
    (25, Hyperactivity, Some("B2"), false, "Waiting in a queue or for my turn feels almost unbearable."),
    (26, Hyperactivity, Some("B2"), false, "I say things without thinking and only realise afterwards how they sounded."),
    (27, AtypicalResponding, None, false, "I have been to the moon."),
    (28, EmotionalDysregulation, None, false, "My emotions flare up quickly and intensely."),
    (29, EmotionalDysregulation, None, false, "Small frustrations can ruin my whole day."),
    (30, EmotionalDysregulation, None, false, "I find it hard to calm down once I am upset."),
    (31, Defensiveness, None, false, "I never feel tired."),
    (32, EmotionalDysregulation, None, false, "Criticism or perceived rejection hurts me far more than it seems to hurt others."),
    (33, EmotionalDysregulation, None, false, "My mood can shift several times in a single day."),
    (34, EmotionalDysregulation, None, false, "I lose my composure under pressure."),
    (35, Acquiescence, None, false, "I like to plan everything in advance."),
    (36, EmotionalDysregulation, None, false, "I react more strongly than a situation warrants and feel embarrassed afterwards."),
    (37, EmotionalDysregulation, None, false, "Strong emotions make it hard for me to think clearly."),
    (38, SocialCommunication, Some("D1"), false, "I find it hard to know when it is my turn to speak in a conversation."),
    (39, SocialCommunication, Some("D1"), false, "Small talk feels pointless or exhausting to me."),
    (40, SocialCommunication, Some("D1"), false, "I find it hard to make new friends."),
    (41, SocialCommunication, Some("D1"), false, "People tell me I talk too much about my own topics."),
    (42, SocialCommunication, Some("D1"), false, "I find it hard to work out what others expect of me socially."),
    (43, SocialDesirability, None, false, "I always keep every promise I make."),
    (44, SocialCommunication, Some("D2"), false, "I find it hard to read facial expressions or tone of voice."),
    (45, SocialCommunication, Some("D2"), false, "Making eye contact feels uncomfortable or unnatural to me."),
    (46, SocialCommunication, Some("D2"), false, "People misread my facial expression or tone."),
    (47, AtypicalResponding, None, false, "I can breathe underwater without any equipment."),
    (48, SocialCommunication, Some("D2"), false, "I take things literally and miss sarcasm or hints."),
    (49, SocialCommunication, Some("D2"), false, "I struggle to tell whether someone is bored by what I am saying."),
    (50, RepetitivePatterns, Some("E1"), false, "Unexpected changes to my plans cause me significant distress."),
    (51, Defensiveness, None, false, "Nothing ever makes me nervous."),
    (52, RepetitivePatterns, Some("E1"), false, "I follow the same routines every day and feel uneasy when they are disrupted."),
    (53, RepetitivePatterns, Some("E1"), false, "I like to do things in exactly the same way each time."),
    (54, RepetitivePatterns, Some("E1"), false, "I get upset when plans change at the last minute."),
    (55, Acquiescence, None, false, "I prefer working alone."),
    (56, RepetitivePatterns, Some("E2"), false, "I have intense interests that absorb most of my free time."),
    (57, RepetitivePatterns, Some("E2"), false, "I collect detailed information about topics that fascinate me."),
    (58, RepetitivePatterns, Some("E2"), false, "I notice patterns in numbers, dates or details that others miss."),
    (59, RepetitivePatterns, Some("E2"), false, "I can talk about my favourite subject for hours."),
    (60, Sensory, Some("F1"), false, "Certain sounds that others barely notice are painful or unbearable to me."),
    (61, Sensory, Some("F1"), false, "Bright or flickering lights bother me."),
    (62, Sensory, Some("F1"), false, "Clothing labels, seams or certain fabrics are intolerable to me."),
    (63, SocialDesirability, None, false, "I have never been late for anything."),
    (64, Sensory, Some("F1"), false, "Strong smells make me feel unwell."),
    (65, Sensory, Some("F1"), false, "Busy, noisy places leave me exhausted or overwhelmed."),
    (66, Sensory, Some("F1"), false, "Being touched unexpectedly makes me flinch."),
    (67, AtypicalResponding, None, false, "I have never used a door."),
    (68, Sensory, Some("F2"), false, "I seek out intense sensations such as loud music, spicy food or deep pressure."),
    (69, Sensory, Some("F2"), false, "I rock, pace, tap or make repetitive movements to calm myself."),
    (70, Sensory, Some("F2"), false, "I do not notice hunger, thirst or pain until it becomes intense."),
    (71, Defensiveness, None, false, "I have never made a mistake at work or in my studies."),
    (72, Sensory, Some("F2"), false, "I need movement or something in my hands to think clearly."),
    (73, Camouflaging, Some("G1"), false, "I copy other people's gestures, expressions or phrases to fit in."),
    (74, Camouflaging, Some("G1"), false, "In social situations I constantly monitor how I come across."),
    (75, Acquiescence, None, false, "I am at my best in the morning."),
    (76, Camouflaging, Some("G1"), false, "I feel I am playing a role when I am with other people."),
    (77, Camouflaging, Some("G1"), false, "I rarely feel I can be fully myself around other people."),
    (78, Camouflaging, Some("G2"), false, "I rehearse conversations in my head before having them."),
    (79, Camouflaging, Some("G2"), false, "I have learned social rules by studying people, films or books."),
    (80, Camouflaging, Some("G2"), false, "I need time alone to recover after socialising, even with people I like."),
    (81, Camouflaging, Some("G2"), false, "I prepare scripts or topics in advance for social events."),
    (82, Dyslexia, None, false, "Reading aloud is difficult or stressful for me."),
    (83, SocialDesirability, None, false, "I like everyone I have ever met."),
    (84, Dyslexia, None, false, "I reread sentences several times to understand them."),
    (85, Dyslexia, None, false, "I mix up letters or digits, for example b and d, or 69 and 96."),
    (86, Dyslexia, None, false, "My spelling is inconsistent, even for common words."),
    (87, AtypicalResponding, None, false, "I sleep less than ten minutes a week."),
    (88, Dyslexia, None, false, "I read slowly or have to reread a passage to understand it."),
    (89, Dyslexia, None, false, "I struggle to recall names or words I have only just read."),
    (90, Dyslexia, None, false, "Filling in forms or writing longer texts takes me much longer than others."),
    (91, Defensiveness, None, false, "I never feel bored."),
    (92, Dyscalculia, None, false, "Mental arithmetic, such as working out change, is hard for me."),
    (93, Dyscalculia, None, false, "I struggle to estimate quantities, distances or time."),
    (94, Dyscalculia, None, false, "I find it hard to remember phone numbers or PIN codes."),
    (95, Acquiescence, None, false, "I prefer to spend my evenings out."),
    (96, Dyscalculia, None, false, "Timetables, charts or tables of figures confuse me."),
    (97, Dyscalculia, None, false, "I count on my fingers for simple sums."),
    (98, Dyscalculia, None, false, "I find working with numbers difficult."),
    (99, Dyspraxia, None, false, "I bump into things or drop objects more often than others."),
    (100, Dyspraxia, None, false, "Learning physical skills such as cycling or driving took me much longer than others."),
    (101, Dyspraxia, None, false, "My handwriting is messy or tiring to produce."),
    (102, Dyspraxia, None, false, "Tying laces, doing up buttons and similar fine motor tasks are fiddly for me."),
    (103, SocialDesirability, None, false, "I have never taken anything that was not mine, not even a pen."),
    (104, Dyspraxia, None, false, "I find it hard to judge distances, for example when parking or catching a ball."),
    (105, Dyspraxia, None, false, "I have poor coordination in sport or dance."),
    (106, Dyspraxia, None, false, "I get lost easily, even in places I have visited before."),
    (107, AtypicalResponding, None, false, "I have read every book ever written."),
    (108, Defensiveness, None, false, "I always understand everything people say to me."),
    (109, Acquiescence, None, false, "I like to decide everything on the spur of the moment."),
    (110, Acquiescence, None, false, "I prefer working in a team."),
    (111, Acquiescence, None, false, "I am at my best late in the evening."),
];

pub(super) fn standard() -> Vec<Question> {
    QUESTIONS
        .iter()
        .map(|&(id, scale, subscale, reverse_scored, text)| Question {
            id,
            scale,
            subscale: subscale.map(str::to_string),
            text: text.to_string(),
            reverse_scored,
        })
        .collect()
}
