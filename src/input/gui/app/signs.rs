/// One entry on the zodiac wheel. Index 0 is Aries, continuing in the
/// traditional order around the circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZodiacSign {
    pub name: &'static str,
    pub glyph: &'static str,
    pub dates: &'static str,
    pub element: &'static str,
}

pub const ZODIAC_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign {
        name: "Aries",
        glyph: "\u{2648}",
        dates: "Mar 21 - Apr 19",
        element: "Fire",
    },
    ZodiacSign {
        name: "Taurus",
        glyph: "\u{2649}",
        dates: "Apr 20 - May 20",
        element: "Earth",
    },
    ZodiacSign {
        name: "Gemini",
        glyph: "\u{264A}",
        dates: "May 21 - Jun 20",
        element: "Air",
    },
    ZodiacSign {
        name: "Cancer",
        glyph: "\u{264B}",
        dates: "Jun 21 - Jul 22",
        element: "Water",
    },
    ZodiacSign {
        name: "Leo",
        glyph: "\u{264C}",
        dates: "Jul 23 - Aug 22",
        element: "Fire",
    },
    ZodiacSign {
        name: "Virgo",
        glyph: "\u{264D}",
        dates: "Aug 23 - Sep 22",
        element: "Earth",
    },
    ZodiacSign {
        name: "Libra",
        glyph: "\u{264E}",
        dates: "Sep 23 - Oct 22",
        element: "Air",
    },
    ZodiacSign {
        name: "Scorpio",
        glyph: "\u{264F}",
        dates: "Oct 23 - Nov 21",
        element: "Water",
    },
    ZodiacSign {
        name: "Sagittarius",
        glyph: "\u{2650}",
        dates: "Nov 22 - Dec 21",
        element: "Fire",
    },
    ZodiacSign {
        name: "Capricorn",
        glyph: "\u{2651}",
        dates: "Dec 22 - Jan 19",
        element: "Earth",
    },
    ZodiacSign {
        name: "Aquarius",
        glyph: "\u{2652}",
        dates: "Jan 20 - Feb 18",
        element: "Air",
    },
    ZodiacSign {
        name: "Pisces",
        glyph: "\u{2653}",
        dates: "Feb 19 - Mar 20",
        element: "Water",
    },
];
