//! The C++ functions walked through on the code slides
//!
//! Source is stored as plain text. Styling is a separate token layer produced
//! by [`crate::highlight::annotate`], so the exported deck never has to scrub
//! markup out of these strings. Samples that do arrive as highlighted markup
//! say so through [`Code::Markup`].

use crate::highlight;
use crate::markup;

/// Sample source, tagged with how it is encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Code {
    /// Plain source; styling comes from the token layer
    Plain(&'static str),
    /// Highlighted markup: tags plus `&lt;`-style entities
    Markup(&'static str),
}

impl Code {
    /// The stored text, tags and all.
    pub fn source(&self) -> &'static str {
        match self {
            Code::Plain(source) | Code::Markup(source) => source,
        }
    }

    /// The source with every tag removed and every entity decoded.
    pub fn plain_text(&self) -> String {
        match self {
            Code::Plain(source) => highlight::plain_text(&highlight::annotate(source)),
            Code::Markup(markup) => markup::strip_markup(markup),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionSample {
    pub name: &'static str,
    pub description: &'static str,
    pub complexity: &'static str,
    pub return_type: &'static str,
    pub code: Code,
    pub output: &'static str,
}

pub const FUNCTION_SAMPLES: [FunctionSample; 5] = [
    FunctionSample {
        name: "int main()",
        description: "Entry point: prepares the classroom, seats three students and prints the map.",
        complexity: "O(1) + O(R*C) per call",
        return_type: "int",
        code: Code::Plain(r#"int main() {

    initClassroom();  // Initialize empty seats

    // Assign seats to students
    assignSeat("S_001");
    assignSeat("S_002");
    assignSeat("S_003");

    displayMap();     // Show final layout

    return 0;
}"#),
        output: "Allocated S_001
Allocated S_002
Allocated S_003
--- CURRENT CLASS LAYOUT ---",
    },
    FunctionSample {
        name: "void initClassroom()",
        description: "Marks every cell of the ROWS x COLS matrix as \"EMPTY\".",
        complexity: "O(R * C) where R=rows, C=columns",
        return_type: "void",
        code: Code::Plain(r#"void initClassroom() {

    for (int i = 0; i < ROWS; i++) {
        for (int j = 0; j < COLS; j++) {
            classroom[i][j] = "EMPTY";
        }
    }
}"#),
        output: "Classroom initialized with 30 empty seats.",
    },
    FunctionSample {
        name: "bool isSeatAvailable(int row, int col)",
        description: "Bounds-checks a position and reports whether the seat is still empty.",
        complexity: "O(1) - Constant time lookup",
        return_type: "bool",
        code: Code::Plain(r#"bool isSeatAvailable(int row, int col) {

    // Validate bounds
    if (row < 0 || row >= ROWS || col < 0 || col >= COLS) {
        return false;
    }

    // Check if seat is empty
    return classroom[row][col] == "EMPTY";
}"#),
        output: "Seat [0,0] is available: true
Seat [0,0] is available: false (after assignment)",
    },
    FunctionSample {
        name: "bool assignSeat(string studentID)",
        description: "Scans row by row and places the student in the first free seat.",
        complexity: "O(R * C) - Linear scan",
        return_type: "bool",
        code: Code::Plain(r#"bool assignSeat(string studentID) {

    for (int i = 0; i < ROWS; i++) {
        for (int j = 0; j < COLS; j++) {
            if (isSeatAvailable(i, j)) {
                classroom[i][j] = studentID;
                cout << "Allocated " << studentID << endl;
                return true;
            }
        }
    }

    cout << "Error: Class is full!" << endl;
    return false;
}"#),
        output: "Allocated S_001
Allocated S_002",
    },
    FunctionSample {
        name: "void displayMap()",
        description: "Prints the whole matrix as a fixed-width table.",
        complexity: "O(R * C) - Full matrix traversal",
        return_type: "void",
        code: Code::Plain(r#"void displayMap() {

    cout << "--- CURRENT CLASS LAYOUT ---" << endl;

    for (int i = 0; i < ROWS; i++) {
        for (int j = 0; j < COLS; j++) {
            cout << "| " << setw(10) << classroom[i][j] << " ";
        }
        cout << "|" << endl;
    }
}"#),
        output: "--- CURRENT CLASS LAYOUT ---
| S_001      | S_002      | EMPTY      |
| EMPTY      | EMPTY      | EMPTY      |",
    },
];

pub const SAMPLE_OUTPUT: &str = "--- SMART SEATING ENGINE v1.0 ---
Initializing classroom with 30 seats...
Allocated S_001 to seat [0,0]
Allocated S_002 to seat [0,1]
Allocated S_003 to seat [0,2]
--- CURRENT CLASS LAYOUT ---
| S_001      | S_002      | S_003      |
| EMPTY      | EMPTY      | EMPTY      |";

pub const FULL_OUTPUT: &str = "Allocated S_001
Allocated S_002
Allocated S_003
--- CURRENT CLASS LAYOUT ---
| S_001      | S_002      | S_003      | EMPTY      | EMPTY      | EMPTY      |
| EMPTY      | EMPTY      | EMPTY      | EMPTY      | EMPTY      | EMPTY      |
| EMPTY      | EMPTY      | EMPTY      | EMPTY      | EMPTY      | EMPTY      |
| EMPTY      | EMPTY      | EMPTY      | EMPTY      | EMPTY      | EMPTY      |
| EMPTY      | EMPTY      | EMPTY      | EMPTY      | EMPTY      | EMPTY      |
----------------------------";

pub const FULL_SOURCE: &str = r#"#include <iostream>
#include <iomanip>
#include <string>
using namespace std;

// Global Constants
const int ROWS = 5;
const int COLS = 6;

// 2D Array (Matrix) for classroom
string classroom[ROWS][COLS];

// Function: Initialize Classroom
void initClassroom() {
    for (int i = 0; i < ROWS; i++) {
        for (int j = 0; j < COLS; j++) {
            classroom[i][j] = "EMPTY";
        }
    }
}

// Function: Check Seat Availability
bool isSeatAvailable(int row, int col) {
    if (row < 0 || row >= ROWS || col < 0 || col >= COLS) {
        return false;
    }
    return classroom[row][col] == "EMPTY";
}

// Function: Display Classroom Map
void displayMap() {
    cout << "--- CURRENT CLASS LAYOUT ---" << endl;
    for (int i = 0; i < ROWS; i++) {
        for (int j = 0; j < COLS; j++) {
            cout << "| " << setw(10) << classroom[i][j] << " ";
        }
        cout << "|" << endl;
    }
}

// Function: Assign Seat
bool assignSeat(string studentID) {
    for (int i = 0; i < ROWS; i++) {
        for (int j = 0; j < COLS; j++) {
            if (isSeatAvailable(i, j)) {
                classroom[i][j] = studentID;
                cout << "Allocated " << studentID << endl;
                return true;
            }
        }
    }
    cout << "Error: Class is full!" << endl;
    return false;
}

// Main Execution
int main() {
    initClassroom();

    assignSeat("S_001");
    assignSeat("S_002");
    assignSeat("S_003");

    displayMap();
    return 0;
}
"#;
