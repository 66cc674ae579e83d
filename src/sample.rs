//! Built-in question and candidate answer
//!
//! The answer is intentionally broken (`function App()=>`, `style={{ color= "blue" }}`,
//! an unclosed `<button>`) so the reviewer has something to catch. Keep it as-is.

/// The coding task handed to the candidate
pub const QUESTION: &str = r#"
Create a React component that displays a blue "Click Me" button.
When clicked, it should show an alert saying "Button Clicked!".
"#;

/// The candidate's submission
pub const ANSWER: &str = r#"
import React from "react";

function App()=> {
  return (
    <button style={{ color= "blue" }}>
      Click Me
    <button>
  );
}

export default App;
"#;
