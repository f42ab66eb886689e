//! Fixed tokens of the record micro-syntax and the fresh-document skeleton.

/// Introduces one record: `\entry{HEADWORD}{TYPE}{DEFINITIONS}{EXAMPLES}`
pub const RECORD_MARKER: &str = r"\entry{";

/// Opens the record list. First occurrence wins.
pub const REGION_START: &str = r"\begin{itemize}[leftmargin=*]";

/// Closes the record list. Last occurrence wins, the preamble's `\entry`
/// macro carries its own itemize environment.
pub const REGION_END: &str = r"\end{itemize}";

/// Separates items inside the definitions and examples blocks
pub const ITEM_MARKER: &str = r"\item";

/// Splits an example item into source sentence and translation
pub const EXAMPLE_DELIMITER: &str = r"\\";

pub const PREAMBLE: &str = r"\documentclass[12pt]{article}
\usepackage[margin=1in]{geometry}
\usepackage[utf8]{inputenc}
\usepackage[T1]{fontenc}
\usepackage{lmodern}
\usepackage[french,english]{babel}
\usepackage{enumitem}
\newcommand{\entry}[4]{
  \item \textbf{#1} (#2)
    \begin{enumerate}[label=\alph*., leftmargin=*]
      #3
    \end{enumerate}
    \textbf{Examples:}
    \begin{itemize}
      #4
    \end{itemize}
  \vspace{0.5cm}
}
\title{Detailed French Vocabulary List}
\author{}
\date{}
\begin{document}
\maketitle
\begin{itemize}[leftmargin=*]";

pub const SAMPLE_RECORD: &str = r"\entry{Agaçante}{adjective}
  {
    \item Annoying, irritating
    \item Exasperating, vexing
    \item Teasing, provocative (in a mildly frustrating way)
  }
  {
    \item Cette musique répétitive est vraiment agaçante. \\ (This repetitive music is really annoying.)
    \item Son attitude agaçante finit par lasser tout le monde. \\ (Her irritating attitude ends up tiring everyone out.)
    \item Elle a un sourire agaçant qui me met mal à l'aise. \\ (She has a vexing smile that makes me uncomfortable.)
  }";

pub const FOOTER: &str = r"\end{itemize}
\end{document}
";

/// Minimal valid document: preamble, one sample record, footer
pub fn skeleton() -> String {
    format!("{PREAMBLE}\n{SAMPLE_RECORD}\n{FOOTER}")
}

/// True when a `\` at `pos` starts a real marker rather than the tail of `\\`
pub(crate) fn is_unescaped(text: &str, pos: usize) -> bool {
    let backslashes = text[..pos].bytes().rev().take_while(|b| *b == b'\\').count();
    backslashes % 2 == 0
}

/// Byte offsets of every unescaped occurrence of `token` in `text`
pub(crate) fn find_all<'a>(text: &'a str, token: &'a str) -> impl Iterator<Item = usize> + 'a {
    text.match_indices(token)
        .map(|(pos, _)| pos)
        .filter(move |pos| is_unescaped(text, *pos))
}

/// 1-based line number of a byte offset
pub(crate) fn line_of(text: &str, offset: usize) -> usize {
    text[..offset].bytes().filter(|b| *b == b'\n').count() + 1
}
