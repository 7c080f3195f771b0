//! Level catalog - the fixed, ordered sequence of tutorial missions.
//!
//! The catalog is static data baked into the binary. Levels are immutable,
//! densely numbered 1..=25, and never created or destroyed at runtime. Each
//! level carries its narrative text, a starter buffer for the editor, a
//! reference solution (documentation only, never consulted by the grader),
//! and the declarative check list the validator interprets.

use crate::validator::Check;

/// Sequential level identifier, dense 1..=[`LAST_LEVEL_ID`].
pub type LevelId = u32;

/// Id of the final mission.
pub const LAST_LEVEL_ID: LevelId = 25;

/// One static tutorial unit.
#[derive(Debug)]
pub struct Level {
    pub id: LevelId,
    pub title: &'static str,
    pub mission_name: &'static str,
    /// Mission briefing shown on the objectives tab.
    pub description: &'static str,
    /// Plain-language explanation of the concept, for the briefing tab.
    pub simple_explanation: &'static str,
    /// Optional real-world analogy for the concept.
    pub analogy: Option<&'static str>,
    /// Optional tag naming a concept diagram the shell may render.
    pub visual_tag: Option<&'static str>,
    /// The concrete task, with `backtick` spans around tag names.
    pub instruction: &'static str,
    pub example_snippet: Option<&'static str>,
    /// Editor contents when the level is entered.
    pub starter_code: &'static str,
    /// Reference solution. Documentation for the learner; the validator
    /// never reads it.
    pub solution_example: &'static str,
    pub checks: &'static [Check],
}

/// The full ordered catalog. Stable and read-only.
pub fn catalog() -> &'static [Level] {
    &LEVELS
}

/// Look up a level by id. `None` means the caller passed an id outside
/// 1..=[`LAST_LEVEL_ID`], which is a caller bug rather than a runtime
/// failure.
pub fn level(id: LevelId) -> Option<&'static Level> {
    if (1..=LAST_LEVEL_ID).contains(&id) {
        Some(&LEVELS[(id - 1) as usize])
    } else {
        None
    }
}

static LEVELS: [Level; LAST_LEVEL_ID as usize] = [
    Level {
        id: 1,
        title: "Level 01",
        mission_name: "First Contact",
        description: "Welcome, Cadet. We need to establish a beacon. In HyperText Markup Language (HTML), the biggest beacon is a Heading 1.",
        simple_explanation: "Headings are the titles of a page. <h1> is the largest and most important one, and a page normally has just one of them.",
        analogy: Some("An <h1> is the headline on a newspaper front page: the first thing anyone sees."),
        visual_tag: Some("h1"),
        instruction: "Create an `<h1>` tag with the text 'Hello Universe'.",
        example_snippet: Some("<h1>I am a Heading</h1>"),
        starter_code: "<!-- Write your code below -->\n",
        solution_example: "<h1>Hello Universe</h1>",
        checks: &[
            Check::Contains { needle: "<h1>", error: "Missing opening <h1> tag." },
            Check::Contains { needle: "</h1>", error: "Missing closing </h1> tag." },
            Check::Contains { needle: "hello universe", error: "The text must say 'Hello Universe'." },
        ],
    },
    Level {
        id: 2,
        title: "Level 02",
        mission_name: "The Transmission",
        description: "Beacon lit. Now we need to send a detail message. Paragraphs are used for main text content.",
        simple_explanation: "The <p> tag holds a paragraph of regular text. Browsers add spacing between paragraphs automatically.",
        analogy: Some("Paragraphs are the body text of a letter, under the big headline."),
        visual_tag: Some("p"),
        instruction: "Create a `<p>` tag that says 'System Online'.",
        example_snippet: Some("<p>This is a paragraph of text.</p>"),
        starter_code: "<h1>Hello Universe</h1>\n",
        solution_example: "<h1>Hello Universe</h1>\n<p>System Online</p>",
        checks: &[
            Check::Contains { needle: "<p>", error: "Missing opening <p> tag." },
            Check::Contains { needle: "</p>", error: "Missing closing </p> tag." },
            Check::Contains { needle: "system online", error: "The text inside the paragraph must be 'System Online'." },
        ],
    },
    Level {
        id: 3,
        title: "Level 03",
        mission_name: "Interactive Core",
        description: "Static text is boring. We need interaction. Buttons allow users to trigger actions.",
        simple_explanation: "A <button> is something the user can click. The text between the tags is the button's label.",
        analogy: Some("A button on a page is like a button on a control panel: label it so the crew knows what it fires."),
        visual_tag: Some("button"),
        instruction: "Add a `<button>` tag with the text 'Launch'.",
        example_snippet: Some("<button>Click Me</button>"),
        starter_code: "<h1>Hello Universe</h1>\n<p>System Online</p>\n",
        solution_example: "<h1>Hello Universe</h1>\n<p>System Online</p>\n<button>Launch</button>",
        checks: &[
            Check::Contains { needle: "<button>", error: "Missing opening <button> tag." },
            Check::Contains { needle: "</button>", error: "Missing closing </button> tag." },
            Check::Contains { needle: "launch", error: "The button text must be 'Launch'." },
        ],
    },
    Level {
        id: 4,
        title: "Level 04",
        mission_name: "Visual Data",
        description: "We captured an image of a black hole. Embed it using the image tag. Note that <img> is a self-closing tag.",
        simple_explanation: "The <img> tag shows a picture. It has no closing tag; the src attribute points at the image file.",
        analogy: Some("src is the coordinates of the picture: without them the frame stays empty."),
        visual_tag: Some("img"),
        instruction: "Add an `<img>` tag with `src` set to 'https://mw1.google.com/crisismap/2019-weather/assets/thunderstorm.png'.",
        example_snippet: Some("<img src='https://example.com/image.png' />"),
        starter_code: "<p>Incoming Transmission...</p>\n",
        solution_example: "<img src='https://mw1.google.com/crisismap/2019-weather/assets/thunderstorm.png' />",
        checks: &[
            Check::Contains { needle: "<img", error: "Missing <img> tag." },
            Check::Contains { needle: "src=", error: "Missing 'src' attribute." },
            Check::Contains { needle: "thunderstorm.png", error: "Incorrect image URL." },
        ],
    },
    Level {
        id: 5,
        title: "Level 05",
        mission_name: "Hyperdrive Link",
        description: "We need a way to warp to other sectors. The anchor tag <a> creates links.",
        simple_explanation: "The <a> tag makes text clickable. The href attribute says where the click takes you.",
        analogy: Some("A link is a wormhole: the text is the entrance, href is the destination."),
        visual_tag: Some("a"),
        instruction: "Create a link `<a>` to 'https://google.com' with the text 'Warp'.",
        example_snippet: Some("<a href='https://example.com'>Click Here</a>"),
        starter_code: "<p>Ready to travel?</p>\n",
        solution_example: "<a href='https://google.com'>Warp</a>",
        checks: &[
            Check::Contains { needle: "<a", error: "Missing <a> tag." },
            Check::Contains { needle: "href=", error: "Missing 'href' attribute." },
            Check::Contains { needle: "google.com", error: "Link must go to google.com." },
            Check::Contains { needle: "warp", error: "Link text must be 'Warp'." },
        ],
    },
    Level {
        id: 6,
        title: "Level 06",
        mission_name: "Cargo Manifest",
        description: "List the items in our cargo hold. Use an unordered list <ul> for items with no specific order.",
        simple_explanation: "A <ul> is a bulleted list. Each entry goes in its own <li> (list item) tag.",
        analogy: Some("A <ul> is a packing checklist: bullet points, no particular order."),
        visual_tag: Some("ul"),
        instruction: "Create a `<ul>` with two `<li>` items: 'Fuel' and 'Rations'.",
        example_snippet: Some("<ul>\n  <li>Apples</li>\n  <li>Oranges</li>\n</ul>"),
        starter_code: "<h3>Cargo Hold:</h3>\n",
        solution_example: "<h3>Cargo Hold:</h3>\n<ul><li>Fuel</li><li>Rations</li></ul>",
        checks: &[
            Check::Contains { needle: "<ul>", error: "Missing <ul> tag." },
            Check::Contains { needle: "</ul>", error: "Missing closing </ul> tag." },
            Check::Contains { needle: "<li>", error: "Missing <li> tags." },
            Check::Contains { needle: "fuel", error: "Missing 'Fuel' item." },
            Check::Contains { needle: "rations", error: "Missing 'Rations' item." },
        ],
    },
    Level {
        id: 7,
        title: "Level 07",
        mission_name: "Launch Sequence",
        description: "Some things must be done in order. Use an ordered list <ol> for numbered lists.",
        simple_explanation: "An <ol> is a numbered list. The browser numbers the <li> items for you, in order.",
        analogy: Some("An <ol> is a launch checklist: step 1 before step 2, always."),
        visual_tag: Some("ol"),
        instruction: "Create an `<ol>` with two `<li>` items: 'Check Engines' and 'Ignite'.",
        example_snippet: Some("<ol>\n  <li>Wake up</li>\n  <li>Code</li>\n</ol>"),
        starter_code: "<h3>Launch Steps:</h3>\n",
        solution_example: "<h3>Launch Steps:</h3>\n<ol><li>Check Engines</li><li>Ignite</li></ol>",
        checks: &[
            Check::Contains { needle: "<ol>", error: "Missing <ol> tag." },
            Check::Contains { needle: "</ol>", error: "Missing closing </ol> tag." },
            Check::Contains { needle: "<li>", error: "Missing <li> tags." },
            Check::Contains { needle: "check engines", error: "Missing 'Check Engines'." },
            Check::Contains { needle: "ignite", error: "Missing 'Ignite'." },
        ],
    },
    Level {
        id: 8,
        title: "Level 08",
        mission_name: "Input Data",
        description: "We need user input to set coordinates. The <input> tag allows users to type text.",
        simple_explanation: "An <input> is a box the user can type into. placeholder shows hint text until they do.",
        analogy: None,
        visual_tag: Some("input"),
        instruction: "Create an `<input>` tag with `type='text'` and `placeholder='Enter Coordinates'`.",
        example_snippet: Some("<input type='text' placeholder='Your Name' />"),
        starter_code: "<p>Set Destination:</p>\n",
        solution_example: "<input type='text' placeholder='Enter Coordinates' />",
        checks: &[
            Check::Contains { needle: "<input", error: "Missing <input> tag." },
            Check::ContainsAny { needles: &["type=", "type ="], error: "Missing type attribute." },
            Check::Contains { needle: "placeholder=", error: "Missing placeholder attribute." },
            Check::Contains { needle: "enter coordinates", error: "Placeholder text mismatch." },
        ],
    },
    Level {
        id: 9,
        title: "Level 09",
        mission_name: "Compartmentalize",
        description: "We need to group elements together. The <div> tag helps organize content into sections.",
        simple_explanation: "A <div> is an invisible container. It draws nothing itself, it just groups the tags inside it.",
        analogy: Some("A <div> is a cargo crate: the crate is plain, what matters is what you pack inside."),
        visual_tag: Some("div"),
        instruction: "Wrap the existing `<h1>` and `<p>` inside a `<div>` tag.",
        example_snippet: Some("<div>\n  <h2>Title</h2>\n  <p>Content</p>\n</div>"),
        starter_code: "<h1>Warning</h1>\n<p>Oxygen Low</p>",
        solution_example: "<div><h1>Warning</h1><p>Oxygen Low</p></div>",
        checks: &[
            Check::Contains { needle: "<div>", error: "Missing opening <div> tag." },
            Check::Contains { needle: "</div>", error: "Missing closing </div> tag." },
            Check::Within {
                open: "<div>",
                close: "</div>",
                needles: &["<h1>", "<p>"],
                error: "The h1 and p must be inside the div.",
            },
        ],
    },
    Level {
        id: 10,
        title: "Level 10",
        mission_name: "Color Coding",
        description: "Customize the look of specific text. The style attribute lets you add CSS directly.",
        simple_explanation: "The style attribute changes how one tag looks. 'color: red;' makes its text red.",
        analogy: None,
        visual_tag: Some("style"),
        instruction: "Add `style='color: red;'` to the `<span>` tag to make the alert red.",
        example_snippet: Some("<p>This is <span style='color: blue;'>blue</span> text.</p>"),
        starter_code: "<p>System Status: <span>CRITICAL</span></p>",
        solution_example: "<p>System Status: <span style='color: red;'>CRITICAL</span></p>",
        checks: &[
            Check::Contains { needle: "<span", error: "Missing <span> tag." },
            Check::Contains { needle: "style=", error: "Missing style attribute." },
            Check::Contains { needle: "color:", error: "Style must set color to red." },
            Check::Contains { needle: "red", error: "Style must set color to red." },
        ],
    },
    Level {
        id: 11,
        title: "Level 11",
        mission_name: "Breaks & Barriers",
        description: "Text needs breathing room. <br> forces a line break, and <hr> draws a horizontal line.",
        simple_explanation: "<br> breaks a line inside text; <hr> draws a full-width divider line. Neither has a closing tag.",
        analogy: None,
        visual_tag: None,
        instruction: "Add a `<hr>` between the two paragraphs, and a `<br>` inside the second paragraph after 'Location:'.",
        example_snippet: Some("<p>First Line.<br>Second Line.</p>\n<hr>\n<p>Next Section</p>"),
        starter_code: "<p>Sector 7G.</p>\n\n<p>Location: Earth.</p>",
        solution_example: "<p>Sector 7G.</p><hr><p>Location:<br> Earth.</p>",
        checks: &[
            Check::Contains { needle: "<hr>", error: "Missing <hr> tag." },
            Check::Contains { needle: "<br>", error: "Missing <br> tag." },
        ],
    },
    Level {
        id: 12,
        title: "Level 12",
        mission_name: "Strong Signal",
        description: "Make text stand out semantically. The <strong> tag indicates strong importance (usually bold).",
        simple_explanation: "<strong> marks text as important. Browsers show it bold, and screen readers stress it.",
        analogy: None,
        visual_tag: None,
        instruction: "Wrap the word 'DANGER' in a `<strong>` tag.",
        example_snippet: Some("<p>This is <strong>important</strong> info.</p>"),
        starter_code: "<p>Status: DANGER ahead.</p>",
        solution_example: "<p>Status: <strong>DANGER</strong> ahead.</p>",
        checks: &[
            Check::Contains { needle: "<strong>", error: "Missing <strong> tag." },
            Check::Contains { needle: "</strong>", error: "Missing closing </strong> tag." },
            Check::Contains { needle: "<strong>danger</strong>", error: "The word 'DANGER' must be inside strong tags." },
        ],
    },
    Level {
        id: 13,
        title: "Level 13",
        mission_name: "Emphasis",
        description: "Add emphasis to speech or names. The <em> tag is for emphasized text (usually italic).",
        simple_explanation: "<em> emphasizes a word or phrase. Browsers show it in italics.",
        analogy: None,
        visual_tag: None,
        instruction: "Wrap the ship name 'Odyssey' in an `<em>` tag.",
        example_snippet: Some("<p>Welcome to the <em>Endurance</em>.</p>"),
        starter_code: "<p>Validating ID for Odyssey.</p>",
        solution_example: "<p>Validating ID for <em>Odyssey</em>.</p>",
        checks: &[
            Check::Contains { needle: "<em>", error: "Missing <em> tag." },
            Check::Contains { needle: "</em>", error: "Missing closing </em> tag." },
            Check::Contains { needle: "<em>odyssey</em>", error: "The word 'Odyssey' must be inside em tags." },
        ],
    },
    Level {
        id: 14,
        title: "Level 14",
        mission_name: "Sub-levels",
        description: "Headings have hierarchy. <h1> is main, <h2> is sub-section, <h3> is below that.",
        simple_explanation: "Headings run from <h1> (biggest) down to <h6> (smallest). Use the levels to show structure, not just size.",
        analogy: Some("Heading levels are chapter, section, subsection in a field manual."),
        visual_tag: None,
        instruction: "Change the 'Mission Report' to `<h2>` and 'Stats' to `<h3>`.",
        example_snippet: Some("<h1>Title</h1>\n<h2>Subtitle</h2>\n<h3>Section</h3>"),
        starter_code: "<h1>Log Entry</h1>\n<h1>Mission Report</h1>\n<h1>Stats</h1>",
        solution_example: "<h1>Log Entry</h1>\n<h2>Mission Report</h2>\n<h3>Stats</h3>",
        checks: &[
            Check::Contains { needle: "<h2>mission report</h2>", error: "'Mission Report' should be h2." },
            Check::Contains { needle: "<h3>stats</h3>", error: "'Stats' should be h3." },
        ],
    },
    Level {
        id: 15,
        title: "Level 15",
        mission_name: "The Grid",
        description: "We need to organize data in a grid. Use <table>, <tr> (table row), and <td> (table data).",
        simple_explanation: "A <table> is built from rows (<tr>), and each row is built from cells (<td>).",
        analogy: None,
        visual_tag: None,
        instruction: "Create a `<table>` with one `<tr>` containing two `<td>` cells: 'ID' and '99'.",
        example_snippet: Some("<table>\n  <tr>\n    <td>A1</td>\n    <td>B2</td>\n  </tr>\n</table>"),
        starter_code: "<!-- Create table below -->\n",
        solution_example: "<table><tr><td>ID</td><td>99</td></tr></table>",
        checks: &[
            Check::Contains { needle: "<table>", error: "Missing <table> tag." },
            Check::Contains { needle: "<tr>", error: "Missing <tr> tag." },
            Check::Contains { needle: "<td>", error: "Missing cell with 'ID'." },
            Check::Contains { needle: "id", error: "Missing cell with 'ID'." },
            Check::Contains { needle: "99", error: "Missing cell with '99'." },
        ],
    },
    Level {
        id: 16,
        title: "Level 16",
        mission_name: "Table Headers",
        description: "Tables need labels. Use <th> for header cells instead of <td> in the first row.",
        simple_explanation: "<th> is a header cell. It works like <td> but marks the cell as a column label.",
        analogy: None,
        visual_tag: None,
        instruction: "Change the first row's cells to `<th>`.",
        example_snippet: Some("<tr>\n  <th>Name</th>\n  <th>Age</th>\n</tr>"),
        starter_code: "<table>\n  <tr>\n    <td>Planet</td>\n    <td>Status</td>\n  </tr>\n  <tr>\n    <td>Mars</td>\n    <td>Habitable</td>\n  </tr>\n</table>",
        solution_example: "<table><tr><th>Planet</th><th>Status</th></tr><tr><td>Mars</td><td>Habitable</td></tr></table>",
        checks: &[
            Check::Contains { needle: "<th>", error: "'Planet' should be inside <th>." },
            Check::Contains { needle: "planet", error: "'Planet' should be inside <th>." },
            Check::Contains { needle: "status", error: "'Status' should be inside <th>." },
        ],
    },
    Level {
        id: 17,
        title: "Level 17",
        mission_name: "Data Entry",
        description: "A <form> wraps input elements to submit data.",
        simple_explanation: "A <form> groups inputs that belong together so they can be submitted as one unit.",
        analogy: Some("A <form> is a clipboard: all the fields ride on one board and get handed in together."),
        visual_tag: None,
        instruction: "Wrap the input and button in a `<form>` tag.",
        example_snippet: Some("<form>\n  <input />\n  <button>Send</button>\n</form>"),
        starter_code: "<input type='text' placeholder='Name'>\n<button>Submit</button>",
        solution_example: "<form><input type='text' placeholder='Name'><button>Submit</button></form>",
        checks: &[
            Check::Contains { needle: "<form>", error: "Missing opening <form> tag." },
            Check::Contains { needle: "</form>", error: "Missing closing </form> tag." },
            Check::Within {
                open: "<form>",
                close: "</form>",
                needles: &["<input", "<button"],
                error: "Input and button must be inside form.",
            },
        ],
    },
    Level {
        id: 18,
        title: "Level 18",
        mission_name: "Checklist",
        description: "Sometimes we need multiple choices. Use <input type='checkbox'>.",
        simple_explanation: "A checkbox input can be ticked on or off, independently of any other checkbox.",
        analogy: None,
        visual_tag: None,
        instruction: "Create a checkbox with the label 'Systems Ready'. (Put text after the input).",
        example_snippet: Some("<input type='checkbox' /> Agree to Terms"),
        starter_code: "<p>Pre-flight Check:</p>\n",
        solution_example: "<p>Pre-flight Check:</p>\n<input type='checkbox'> Systems Ready",
        checks: &[
            Check::ContainsAny {
                needles: &["type='checkbox'", "type=\"checkbox\""],
                error: "Missing checkbox input.",
            },
            Check::Contains { needle: "systems ready", error: "Missing text 'Systems Ready'." },
        ],
    },
    Level {
        id: 19,
        title: "Level 19",
        mission_name: "Exclusive Choice",
        description: "For single choice options, use <input type='radio'>. Radios share a name attribute to group them.",
        simple_explanation: "Radio inputs with the same name form a group where only one can be selected at a time.",
        analogy: Some("Radio buttons are the preset buttons on an old car radio: pressing one pops the others out."),
        visual_tag: None,
        instruction: "Create two radio inputs with `name='engine'`.",
        example_snippet: Some("<input type='radio' name='color' /> Red\n<input type='radio' name='color' /> Blue"),
        starter_code: "<p>Select Engine Mode:</p>\n",
        solution_example: "<input type='radio' name='engine'> Ion\n<input type='radio' name='engine'> Warp",
        checks: &[
            Check::CountAtLeast { needle: "radio", min: 2, error: "Need at least two radio inputs." },
            Check::ContainsAny {
                needles: &["name='engine'", "name=\"engine\""],
                error: "Missing name='engine' attribute.",
            },
        ],
    },
    Level {
        id: 20,
        title: "Level 20",
        mission_name: "Transmission Log",
        description: "For longer text, use <textarea>. It allows multi-line input.",
        simple_explanation: "A <textarea> is a multi-line text box, for anything longer than a single line.",
        analogy: None,
        visual_tag: None,
        instruction: "Add a `<textarea>` with placeholder 'Enter log entry...'.",
        example_snippet: Some("<textarea>Default text</textarea>"),
        starter_code: "<h2>Captain's Log</h2>\n",
        solution_example: "<h2>Captain's Log</h2>\n<textarea placeholder='Enter log entry...'></textarea>",
        checks: &[
            Check::Contains { needle: "<textarea", error: "Missing <textarea> tag." },
            Check::Contains { needle: "enter log entry", error: "Placeholder text mismatch." },
        ],
    },
    Level {
        id: 21,
        title: "Level 21",
        mission_name: "Dropdown Menu",
        description: "Save space with a dropdown. Use <select> with <option> tags inside.",
        simple_explanation: "A <select> is a dropdown menu. Each choice in the menu is an <option> tag.",
        analogy: None,
        visual_tag: None,
        instruction: "Create a `<select>` with options 'Earth' and 'Mars'.",
        example_snippet: Some("<select>\n  <option>A</option>\n  <option>B</option>\n</select>"),
        starter_code: "<p>Destination:</p>\n",
        solution_example: "<select><option>Earth</option><option>Mars</option></select>",
        checks: &[
            Check::Contains { needle: "<select>", error: "Missing <select> tag." },
            Check::Contains { needle: "</select>", error: "Missing closing </select> tag." },
            Check::Contains { needle: "<option>", error: "Missing Earth option." },
            Check::Contains { needle: "earth", error: "Missing Earth option." },
            Check::Contains { needle: "mars", error: "Missing Mars option." },
        ],
    },
    Level {
        id: 22,
        title: "Level 22",
        mission_name: "Clickable Labels",
        description: "Make inputs easier to select. Wrap text and input in a <label> tag.",
        simple_explanation: "A <label> ties text to an input: clicking the text activates the input it wraps.",
        analogy: None,
        visual_tag: None,
        instruction: "Wrap the checkbox and text 'Auto-Pilot' in a `<label>` tag.",
        example_snippet: Some("<label><input type='checkbox' /> Remember Me</label>"),
        starter_code: "<input type='checkbox'> Auto-Pilot",
        solution_example: "<label><input type='checkbox'> Auto-Pilot</label>",
        checks: &[
            Check::Contains { needle: "<label>", error: "Missing opening <label> tag." },
            Check::Contains { needle: "</label>", error: "Missing closing </label> tag." },
            Check::Within {
                open: "<label>",
                close: "</label>",
                needles: &["checkbox"],
                error: "Checkbox must be inside label.",
            },
            Check::Within {
                open: "<label>",
                close: "</label>",
                needles: &["auto-pilot"],
                error: "Text 'Auto-Pilot' must be inside label.",
            },
        ],
    },
    Level {
        id: 23,
        title: "Level 23",
        mission_name: "Semantics: Header/Footer",
        description: "Use semantic tags for page structure. <header> for top content, <footer> for bottom.",
        simple_explanation: "<header> and <footer> name the top and bottom regions of a page so their role is clear from the markup.",
        analogy: None,
        visual_tag: None,
        instruction: "Create a `<header>` with 'Site Title' and a `<footer>` with 'Copyright'.",
        example_snippet: Some("<header>Logo</header>\n<main>...</main>\n<footer>Info</footer>"),
        starter_code: "<!-- Page Structure -->\n",
        solution_example: "<header>Site Title</header><footer>Copyright</footer>",
        checks: &[
            Check::Contains { needle: "<header>", error: "Missing <header> tag." },
            Check::Contains { needle: "<footer>", error: "Missing <footer> tag." },
        ],
    },
    Level {
        id: 24,
        title: "Level 24",
        mission_name: "Semantics: Nav/Main",
        description: "More semantics. <nav> for navigation links, <main> for primary content.",
        simple_explanation: "<nav> holds the page's navigation links; <main> holds the primary content, once per page.",
        analogy: None,
        visual_tag: None,
        instruction: "Add a `<nav>` with a link, and a `<main>` with a paragraph.",
        example_snippet: Some("<nav><a href='#'>Home</a></nav>\n<main><p>Content</p></main>"),
        starter_code: "<header>My Site</header>\n",
        solution_example: "<header>My Site</header><nav><a href='#'>Link</a></nav><main><p>Content</p></main>",
        checks: &[
            Check::Contains { needle: "<nav>", error: "Missing <nav> tag." },
            Check::Contains { needle: "<main>", error: "Missing <main> tag." },
        ],
    },
    Level {
        id: 25,
        title: "Level 25",
        mission_name: "Final Assembly",
        description: "Put it all together cadet. Build a mini profile card.",
        simple_explanation: "Everything so far combines: a container div grouping a heading, an image, and a paragraph.",
        analogy: None,
        visual_tag: None,
        instruction: "Create a `<div>` containing an `<h1>` (Name), an `<img>` (Avatar), and a `<p>` (Bio).",
        example_snippet: Some("<div>\n  <h1>My Name</h1>\n  <img src='...' />\n  <p>Bio...</p>\n</div>"),
        starter_code: "<!-- Build your profile card -->\n",
        solution_example: "<div><h1>Name</h1><img src='avatar.png'><p>Bio</p></div>",
        checks: &[
            Check::Contains { needle: "<div>", error: "Missing container <div>." },
            Check::Within {
                open: "<div>",
                close: "</div>",
                needles: &["<h1>"],
                error: "Missing <h1> inside div.",
            },
            Check::Within {
                open: "<div>",
                close: "</div>",
                needles: &["<img"],
                error: "Missing <img> inside div.",
            },
            Check::Within {
                open: "<div>",
                close: "</div>",
                needles: &["<p>"],
                error: "Missing <p> inside div.",
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_dense_and_sequential() {
        for (i, lvl) in catalog().iter().enumerate() {
            assert_eq!(lvl.id, (i + 1) as LevelId);
        }
        assert_eq!(catalog().len() as LevelId, LAST_LEVEL_ID);
    }

    #[test]
    fn lookup_by_id_matches_catalog_order() {
        assert_eq!(level(1).map(|l| l.mission_name), Some("First Contact"));
        assert_eq!(level(LAST_LEVEL_ID).map(|l| l.mission_name), Some("Final Assembly"));
        assert!(level(0).is_none());
        assert!(level(LAST_LEVEL_ID + 1).is_none());
    }

    #[test]
    fn every_level_has_at_least_one_check() {
        for lvl in catalog() {
            assert!(!lvl.checks.is_empty(), "level {} has no checks", lvl.id);
        }
    }
}
