//! The daily quote table.
//!
//! Selection follows the stored `quoteIndex`: a non-negative index pins a
//! specific quote, `-1` derives one from the day of the month.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub quote: &'static str,
    pub author: &'static str,
}

/// Quote derived from the calendar date (stable within a day).
pub fn quote_of_day(date: NaiveDate) -> &'static Quote {
    &QUOTES[date.day() as usize % QUOTES.len()]
}

/// Quote pinned by a stored index, if the index is in range.
pub fn quote_at(index: i64) -> Option<&'static Quote> {
    usize::try_from(index).ok().and_then(|i| QUOTES.get(i))
}

pub const QUOTES: &[Quote] = &[
    Quote {
        quote: "The way to get started is to quit talking and begin doing.",
        author: "Walt Disney",
    },
    Quote {
        quote: "You may delay, but time will not.",
        author: "Benjamin Franklin",
    },
    Quote {
        quote: "Time is what we want most, but what we use worst.",
        author: "William Penn",
    },
    Quote {
        quote: "Lost time is never found again.",
        author: "Benjamin Franklin",
    },
    Quote {
        quote: "Don't spend time beating on a wall, hoping to transform it into a door.",
        author: "Coco Chanel",
    },
    Quote {
        quote: "Your time is limited, so don't waste it living someone else's life.",
        author: "Steve Jobs",
    },
    Quote {
        quote: "It's not that we have little time, but more that we waste a good deal of it.",
        author: "Seneca",
    },
    Quote {
        quote: "Yesterday is gone. Tomorrow has not yet come. We have only today. Let us begin.",
        author: "Mother Teresa",
    },
    Quote {
        quote: "The bad news is time flies. The good news is you're the pilot.",
        author: "Michael Altshuler",
    },
    Quote {
        quote: "Do something today that your future self will thank you for.",
        author: "Anonymous",
    },
    Quote {
        quote: "A year from now you may wish you had started today.",
        author: "Karen Lamb",
    },
    Quote {
        quote: "Procrastination is the thief of time.",
        author: "Edward Young",
    },
    Quote {
        quote: "Time and tide wait for no man.",
        author: "Geoffrey Chaucer",
    },
    Quote {
        quote: "The time is always right to do what is right.",
        author: "Martin Luther King Jr.",
    },
    Quote {
        quote: "Time is more valuable than money. You can get more money, but you cannot get more time.",
        author: "Jim Rohn",
    },
    Quote {
        quote: "If not now, when?",
        author: "Hillel the Elder",
    },
    Quote {
        quote: "Time waits for no one.",
        author: "Deborah Moggach",
    },
    Quote {
        quote: "The trouble is, you think you have time.",
        author: "Buddha",
    },
    Quote {
        quote: "Don't wait. The time will never be just right.",
        author: "Napoleon Hill",
    },
    Quote {
        quote: "We must use time creatively.",
        author: "Martin Luther King Jr.",
    },
    Quote {
        quote: "You can't go back and change the beginning, but you can start where you are and change the ending.",
        author: "C.S. Lewis",
    },
    Quote {
        quote: "Better three hours too soon than a minute too late.",
        author: "William Shakespeare",
    },
    Quote {
        quote: "Time is a created thing. To say 'I don't have time' is to say 'I don't want to.'",
        author: "Lao Tzu",
    },
    Quote {
        quote: "Time slips away like grains of sand never to return again.",
        author: "Robin Sharma",
    },
    Quote {
        quote: "Success is determined by how you manage your time.",
        author: "Sunday Adelaja",
    },
    Quote {
        quote: "You cannot escape the responsibility of tomorrow by evading it today.",
        author: "Abraham Lincoln",
    },
    Quote {
        quote: "Time management is life management.",
        author: "Robin Sharma",
    },
    Quote {
        quote: "An inch of time is an inch of gold, but you can't buy that inch of time with an inch of gold.",
        author: "Chinese Proverb",
    },
    Quote {
        quote: "Time you enjoy wasting is not wasted time.",
        author: "Marthe Troly-Curtin",
    },
    Quote {
        quote: "The key is in not spending time, but in investing it.",
        author: "Stephen R. Covey",
    },
    Quote {
        quote: "The only way to do great work is to love what you do.",
        author: "Steve Jobs",
    },
    Quote {
        quote: "You will never find time for anything. If you want time, you must make it.",
        author: "Charles Buxton",
    },
    Quote {
        quote: "Time is the most valuable thing a man can spend.",
        author: "Theophrastus",
    },
    Quote {
        quote: "The two most powerful warriors are patience and time.",
        author: "Leo Tolstoy",
    },
    Quote {
        quote: "Don't waste your time with explanations: people only hear what they want to hear.",
        author: "Paulo Coelho",
    },
    Quote {
        quote: "There is never enough time to do everything, but there is always enough time to do the most important thing.",
        author: "Brian Tracy",
    },
    Quote {
        quote: "The future depends on what you do today.",
        author: "Mahatma Gandhi",
    },
    Quote {
        quote: "It is not enough to be busy; so are the ants. The question is: what are we busy about?",
        author: "Henry David Thoreau",
    },
    Quote {
        quote: "Someday is not a day of the week.",
        author: "Janet Dailey",
    },
    Quote {
        quote: "Success usually comes to those who are too busy to be looking for it.",
        author: "Henry David Thoreau",
    },
    Quote {
        quote: "Stop waiting for the perfect time. The perfect time is now.",
        author: "Anonymous",
    },
    Quote {
        quote: "Time isn't the main thing. It's the only thing.",
        author: "Miles Davis",
    },
    Quote {
        quote: "If you spend too much time thinking about a thing, you'll never get it done.",
        author: "Bruce Lee",
    },
    Quote {
        quote: "Do not wait to strike till the iron is hot; but make it hot by striking.",
        author: "William Butler Yeats",
    },
    Quote {
        quote: "Time is the wisest counselor of all.",
        author: "Pericles",
    },
    Quote {
        quote: "The best time to plant a tree was 20 years ago. The second best time is now.",
        author: "Chinese Proverb",
    },
    Quote {
        quote: "Take care of the minutes and the hours will take care of themselves.",
        author: "Lord Chesterfield",
    },
    Quote {
        quote: "If you love life, don't waste time, for time is what life is made up of.",
        author: "Bruce Lee",
    },
];
