//! Fixed story texts, per genre where the tone differs.

use ht_core::Genre;

/// The scene that opens a new story.
pub fn opening(player_name: &str, genre: Genre) -> String {
    match genre {
        Genre::Fantasy => format!(
            "Welcome, {player_name}, to the realm of Eldoria. Magic flows through every stream, \
             ancient prophecies whisper in the wind, and legends wait to be written. Tell me \
             about your character and the journey that brings you here."
        ),
        Genre::SciFi => format!(
            "Greetings, {player_name}. Aboard the starship Event Horizon, humanity reaches for \
             the stars. Strange signals from deep space, alien artifacts, and cosmic mysteries \
             await. What role do you play in this grand adventure?"
        ),
        Genre::Mystery => format!(
            "Hello, {player_name}. The foggy streets of Ravenport hold secrets in every shadow. \
             Unexplained events, cryptic clues, and suspicious characters fill this noir \
             landscape. What mystery calls to you?"
        ),
    }
}

/// Reply to a request for more description.
pub fn description(genre: Genre) -> &'static str {
    match genre {
        Genre::Fantasy => {
            "Let me paint a richer picture for you. The magic in Eldoria is ancient, woven into the very fabric of reality. Spells linger in the air like exotic perfumes, and mythical creatures watch from the shadows with knowing eyes. Every stone, every stream, every whisper of wind tells a story of empires risen and fallen, of heroes and villains whose legends echo through time.\n\nWhat specific aspect of this magical world would you like to explore further?"
        }
        Genre::SciFi => {
            "The future unfolds before us in intricate, breathtaking detail. Technology and humanity blend in unexpected, often beautiful ways. Holograms flicker beside organic life forms, AI consciousness evolves in vast digital realms, and the universe reveals wonders that challenge our very understanding of existence. Each discovery opens new questions, each answered mystery reveals deeper layers of cosmic truth.\n\nWhich element of this future landscape captures your imagination most?"
        }
        Genre::Mystery => {
            "The atmosphere thickens with each revelation, each uncovered clue. Secrets hide in plain sight, waiting only for the right perspective to reveal them. Every character carries burdens untold, every location holds memories like ghosts in the walls. The truth is an intricate puzzle, its pieces scattered across time and motive, waiting for the patient and perceptive to assemble them.\n\nWhat layer of this mystery shall we peel back next?"
        }
    }
}

/// Reply to a question.
pub fn reflection(genre: Genre) -> &'static str {
    match genre {
        Genre::Fantasy => {
            "That question touches the very heart of this realm's deepest mysteries. The ancient ones say that magic answers not to force, but to will and wonder, and that destiny is written not in stone, but by those brave enough to grasp the pen. The sages in their towers and the druids in their forests have pondered such questions for millennia, yet the answers often reveal themselves differently to each seeker.\n\nWhat truths do you find yourself drawn to uncover in these enchanted lands?"
        }
        Genre::SciFi => {
            "Science tirelessly seeks answers, yet the universe specializes in questions of infinite variety. Each discovery reveals new mysteries, each answered question births ten more in its place. Perhaps among the stars, the journey matters more than the destination; the questions we ask define us more than the answers we find. The cosmos reminds us that wonder is the true engine of progress.\n\nWhat mysteries of existence call most powerfully to you?"
        }
        Genre::Mystery => {
            "Every question leads deeper into the labyrinth, where obvious answers often conceal greater truths beneath their surfaces. What seems simple often has roots reaching into darkness, connections weaving through time and motive in patterns only visible from certain angles. The truth rarely resides in what is said, but often in the silences between words, the spaces between actions.\n\nWhat patterns do you begin to perceive in the gathering shadows?"
        }
    }
}

/// Reply to a longer contribution.
pub fn elaboration(genre: Genre) -> &'static str {
    match genre {
        Genre::Fantasy => {
            "As your words take form, the very air around us shimmers with new possibilities. Magic responds to your narrative, shaping reality around the vision you describe. The story deepens, the world expands, and the characters breathe with greater life. Ancient forests whisper approval, mythical creatures stir from their slumbers, and the fabric of destiny weaves itself around your choices.\n\nWhat wonders, challenges, or revelations emerge from the mists of imagination next?"
        }
        Genre::SciFi => {
            "Your narrative echoes through the corridors of possibility, becoming part of the universe's ever-expanding story. Technology and humanity intertwine in new, unexpected patterns, creating futures previously unimagined. Stars align in new constellations, alien civilizations take clearer form, and the boundaries of known reality stretch to accommodate your vision.\n\nWhere does our cosmic journey lead from this pivotal moment? What new horizons appear on the edge of the unknown?"
        }
        Genre::Mystery => {
            "Each word you add builds another layer to the enigma, another piece to the intricate puzzle taking shape before us. Shadows shift and reform, motives clarify and complicate, the plot thickens with delicious complexity. Clues rearrange themselves in new patterns, characters reveal hidden depths, and the truth becomes both clearer and more elusive.\n\nWhat revelation, what twist, what uncovered secret waits just beyond the next turned page?"
        }
    }
}

/// The next passage of the story.
pub fn continuation(genre: Genre) -> &'static str {
    match genre {
        Genre::Fantasy => {
            "The path forward reveals new wonders and challenges at every turn. Ancient magic stirs in deep places, forgotten prophecies whisper on the edge of hearing, and the fate of kingdoms hangs in the delicate balance of choices yet unmade. Legendary creatures watch from shadowed realms, and the very stones remember stories older than time.\n\nWhat destiny calls to your character in this moment of infinite possibility? What new chapter begins in the epic tale we're writing together?"
        }
        Genre::SciFi => {
            "The cosmos holds infinite possibilities, each more breathtaking than the last. New planets swim into view with atmospheres of impossible colors, alien civilizations extend tentative greetings across the void, and technological marvels beyond current understanding hum with latent power. The fabric of spacetime itself seems to ripple with the weight of discoveries waiting to be made.\n\nWhere does your journey lead from this point of cosmic intersection? What new frontier calls to the explorer's heart?"
        }
        Genre::Mystery => {
            "Each clue we uncover reveals deeper, more complex layers of intrigue. Shadows hold secrets within secrets, and every character we meet has motives hidden beneath motives, stories concealed behind stories. The plot thickens like fog rolling in from the sea, obscuring some truths while revealing others in stark relief.\n\nWhat truth will you uncover next in this labyrinth of deception and revelation? Which thread, when pulled, will make the entire tapestry unravel?"
        }
    }
}

/// Seed ideas offered on request.
pub fn inspirations(genre: Genre) -> &'static [&'static str] {
    match genre {
        Genre::Fantasy => &[
            "Imagine a city built entirely within the branches of a world-tree, where different districts exist on different massive limbs...",
            "What if magic wasn't cast with words or gestures, but through specific emotions that had to be genuinely felt?",
            "Consider a character who discovers they're the reincarnation of a legendary villain, not the hero everyone expected...",
            "Picture a library that contains every story that was never written, every tale that almost happened but didn't...",
        ],
        Genre::SciFi => &[
            "Envision a society where memories can be traded as currency. What would someone sacrifice to buy a better past?",
            "What if humanity's first contact wasn't with aliens, but with our own descendants returning from the far future?",
            "Imagine a planet where time flows differently in various regions. How would civilization develop there?",
            "Consider an AI that becomes obsessed with creating the perfect piece of art, at any cost...",
        ],
        Genre::Mystery => &[
            "What if the detective realizes the murder victim arranged their own death as the ultimate act of revenge?",
            "Imagine a small town where everyone has the same dream every night, and one morning someone from the dream turns up dead...",
            "Consider a series of thefts where nothing valuable is taken, only seemingly random personal items...",
            "What if the clues point to two completely different solutions, both equally plausible but mutually exclusive?",
        ],
    }
}

/// Follow-up prompts for short input.
pub const BRIEF_PROMPTS: &[&str] = &[
    "Can you tell me more about that? What specific details, emotions, or sensations come to mind as you imagine this moment?",
    "I'd love to hear more. What makes this particular moment significant in the larger tapestry of our story?",
    "Let's explore this further together. What sights, sounds, smells, and feelings accompany this scene in your imagination?",
    "There's a rich story here waiting to unfold. What happens next in the movie of your mind?",
    "This is intriguing! What deeper layers, hidden meanings, or unexpected connections can we add to this moment?",
    "Wonderful detail! How does this element connect to the larger narrative we're weaving together?",
];

/// Perspective shifts offered by reframing.
pub const PERSPECTIVES: &[&str] = &[
    "Let's view this through a completely different lens. What if we shifted perspective to a minor character witnessing these events? How would they interpret what's happening? What details would they notice that our main perspective might miss?",
    "Imagine this moment from a new angle, perhaps from high above, like a bird watching the scene unfold, or from deep below, as if the very stones and earth had consciousness. How does the story change when viewed from this unconventional vantage point?",
    "What if we changed the emotional tone entirely? How would this scene feel if it were infused with more suspense, more humor, more melancholy, or more wonder? How would that shift alter the characters' choices and the story's direction?",
    "Let's play with time itself. What echoes from the distant past influence this exact moment? What shadows of the far future already fall upon it? How do different temporal perspectives enrich our understanding of what's happening now?",
    "Consider this scene through the lens of a different genre altogether. What if our fantasy adventure suddenly had noir elements? What if our sci-fi story borrowed from romantic traditions? How would that genre shift reveal new facets of our narrative?",
];

/// Summary text when nothing has been written yet.
pub const BLANK_CANVAS: &str = "Our story is just beginning, a blank canvas waiting for the first brushstrokes of our collective imagination. Each word we write together will build a world of wonder, mystery, and infinite possibility.";

/// Heading of a summary.
pub const SUMMARY_HEADER: &str = "Here's where our story currently stands:";

/// Closing paragraphs of a summary.
pub const SUMMARY_FOOTER: &str = "Every sentence we craft adds another layer of depth to our shared narrative. Each character, each location, each twist and turn contributes to the rich tapestry we're weaving together.\n\nWhat shall we write into existence next?";

/// Wrap an inspiration line.
pub fn inspiration_message(idea: &str) -> String {
    format!(
        "💡 **Story Inspiration:** {idea}\n\nHow might this spark ignite new directions for our narrative?"
    )
}
