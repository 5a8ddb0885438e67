//! LaTeX math command to Unicode symbol table
//!
//! Keys are bare command names (no backslash). Several names are inserted
//! more than once; the table is built by sequential insertion so the last
//! definition is the one that sticks (`\leq` maps to `≤`, not `<`).

use fxhash::FxHashMap;
use lazy_static::lazy_static;

lazy_static! {
    /// Command name to replacement text. Replacements may be empty, a single
    /// glyph or a short string.
    pub static ref MATH_SYMBOLS: FxHashMap<&'static str, &'static str> = {
        let mut m = FxHashMap::default();

        // === Text-mode symbols and size switches ===
        m.insert("ldots", "…");
        m.insert("textbar", "|");
        m.insert("textbullet", "•");
        m.insert("textbackslash", "\\");
        m.insert("S", "§");
        m.insert("textless", "<");
        m.insert("textgreater", ">");
        m.insert("sim", "∼");
        m.insert("backsim", "∽");
        m.insert("tiny", "");
        m.insert("scriptsize", "");
        m.insert("footnotesize", "");
        m.insert("small", "");
        m.insert("normalsize", "");
        m.insert("large", "");

        // === Relations and operators ===
        // The ASCII forms of leq/geq are overridden further down.
        m.insert("ge", ">");
        m.insert("geq", ">");
        m.insert("le", "<");
        m.insert("leq", "<");
        m.insert("leq", "≤");
        m.insert("geq", "≥");
        m.insert("neq", "≠");
        m.insert("doteq", "≐");
        m.insert("approx", "≈");
        m.insert("times", "⨯");
        m.insert("div", "÷");
        m.insert("pm", "±");
        m.insert("mp", "∓");
        m.insert("cdot", "·");
        m.insert("circ", "∘");
        m.insert("ast", "∗");
        m.insert("smallsetminus", "∖");
        m.insert("slash", "∕");
        m.insert("prime", "′");
        m.insert("textprime", "′");
        m.insert("second", "′′");
        m.insert("third", "′′′");
        m.insert("fourth", "′′′′");
        m.insert("backprime", "‵");
        m.insert("dagger", "†");
        m.insert("ddagger", "‡");
        m.insert("bullet", "•");
        m.insert("ldots", "...");
        m.insert("dots", "…");
        m.insert("cat", "⁀");
        m.insert("cdots", "⋯");
        m.insert("infty", "∞");
        m.insert("neg", "¬");
        m.insert("wedge", "∧");
        m.insert("vee", "∨");

        // === Logic and arrows ===
        m.insert("forall", "∀");
        m.insert("in", "∈");
        m.insert("ni", "∋");
        m.insert("nni", "∌");
        m.insert("rightarrow", "→");
        m.insert("leftarrow", "←");
        m.insert("leftrightarrow", "↔");
        m.insert("uparrow", "↑");
        m.insert("downarrow", "↓");
        m.insert("updownarrow", "↕");
        m.insert("nwarrow", "↖");
        m.insert("nearrow", "↗");
        m.insert("searrow", "↘");
        m.insert("swarrow", "↙");
        m.insert("nleftarrow", "↚");
        m.insert("nrightarrow", "↛");
        m.insert("twoheadleftarrow", "↞");
        m.insert("twoheadrightarrow", "↠");
        m.insert("leftarrowtail", "↢");
        m.insert("rightarrowtail", "↣");
        m.insert("mapsfrom", "↤");
        m.insert("MapsUp", "↥");
        m.insert("mapsto", "↦");
        m.insert("MapsDown", "↧");
        m.insert("hookleftarrow", "↩");
        m.insert("hookrightarrow", "↪");
        m.insert("looparrowleft", "↫");
        m.insert("looparrowright", "↬");
        m.insert("leftrightsquigarrow", "↭");
        m.insert("nleftrightarrow", "↮");
        m.insert("lightning", "↯");
        m.insert("Lsh", "↰");
        m.insert("Rsh", "↱");
        m.insert("dlsh", "↲");
        m.insert("drsh", "↳");
        m.insert("curvearrowleft", "↶");
        m.insert("curvearrowright", "↷");
        m.insert("circlearrowleft", "↺");
        m.insert("circlearrowright", "↻");
        m.insert("leftharpoonup", "↼");
        m.insert("leftharpoondown", "↽");
        m.insert("upharpoonright", "↾");
        m.insert("upharpoonleft", "↿");
        m.insert("rightharpoonup", "⇀");
        m.insert("rightharpoondown", "⇁");
        m.insert("downharpoonright", "⇂");
        m.insert("downharpoonleft", "⇃");
        m.insert("rightleftarrows", "⇄");
        m.insert("updownarrows", "⇅");
        m.insert("leftrightarrows", "⇆");
        m.insert("leftleftarrows", "⇇");
        m.insert("upuparrows", "⇈");
        m.insert("rightrightarrows", "⇉");
        m.insert("downdownarrows", "⇊");
        m.insert("leftrightharpoons", "⇋");
        m.insert("rightleftharpoons", "⇌");
        m.insert("nLeftarrow", "⇍");
        m.insert("nLeftrightarrow", "⇎");
        m.insert("nRightarrow", "⇏");
        m.insert("Leftarrow", "⇐");
        m.insert("Uparrow", "⇑");
        m.insert("Rightarrow", "⇒");
        m.insert("Downarrow", "⇓");
        m.insert("Leftrightarrow", "⇔");
        m.insert("Updownarrow", "⇕");
        m.insert("Nwarrow", "⇖");
        m.insert("Nearrow", "⇗");
        m.insert("Searrow", "⇘");
        m.insert("Swarrow", "⇙");
        m.insert("Lleftarrow", "⇚");
        m.insert("Rrightarrow", "⇛");
        m.insert("leftsquigarrow", "⇜");
        m.insert("rightsquigarrow", "⇝");
        m.insert("dashleftarrow", "⇠");
        m.insert("dashrightarrow", "⇢");
        m.insert("LeftArrowBar", "⇤");
        m.insert("RightArrowBar", "⇥");
        m.insert("downuparrows", "⇵");
        m.insert("pfun", "⇸");
        m.insert("ffun", "⇻");
        m.insert("leftarrowtriangle", "⇽");
        m.insert("rightarrowtriangle", "⇾");
        m.insert("leftrightarrowtriangle", "⇿");

        // === Sets, relations, delimiters, miscellany ===
        m.insert("subset", "⊂");
        m.insert("subseteq", "⊆");
        m.insert("supset", "⊃");
        m.insert("supseteq", "⊇");
        m.insert("prec", "≺");
        m.insert("succ", "≻");
        m.insert("exists", "∃");
        m.insert("nexists", "∄");
        m.insert("notin", "∉");
        m.insert("Rightarrow", "⇒");
        m.insert("Leftarrow", "⇐");
        m.insert("cup", "∪");
        m.insert("cap", "∩");
        m.insert("mid", "∣");
        m.insert("nmid", "∤");
        m.insert("parallel", "∥");
        m.insert("nparallel", "∦");
        m.insert("rightangle", "∟");
        m.insert("angle", "∠");
        m.insert("measuredangle", "∡");
        m.insert("sphericalangle", "∢");
        m.insert("propto", "∝");
        m.insert("vdots", "⋮");
        m.insert("diameter", "∅");
        m.insert("lceil", "⌈");
        m.insert("rceil", "⌉");
        m.insert("lfloor", "⌊");
        m.insert("rfloor", "⌋");
        m.insert("varnothing", "∅");
        m.insert("sptilde", "~");
        m.insert("cent", "¢");
        m.insert("pounds", "£");
        m.insert("yen", "¥");
        m.insert("backslash", "\\");
        m.insert("spddot", "\u{0308}");
        m.insert("sphat", "^");
        m.insert("Micro", "μ");
        m.insert("eth", "ð");
        m.insert("imath", "ı");
        m.insert("jmath", "ȷ");
        m.insert("circledR", "®");
        m.insert("therefore", "∴");
        m.insert("because", "∵");
        m.insert("Proportion", "∷");
        m.insert("eqcolon", "∹");

        // === Greek and letterlike symbols ===
        m.insert("alpha", "𝛼");
        m.insert("beta", "𝛽");
        m.insert("varbeta", "β");
        m.insert("gamma", "𝛾");
        m.insert("delta", "𝛿");
        m.insert("epsilon", "𝜀");
        m.insert("varepsilon", "ε");
        m.insert("backepsilon", "϶");
        m.insert("zeta", "𝜁");
        m.insert("eta", "𝜂");
        m.insert("theta", "𝜃");
        m.insert("vartheta", "θ");
        m.insert("iota", "𝜄");
        m.insert("kappa", "𝜅");
        m.insert("varkappa", "𝜘");
        m.insert("lambda", "𝜆");
        m.insert("mu", "𝜇");
        m.insert("nu", "𝜈");
        m.insert("xi", "𝜉");
        m.insert("pi", "𝜋");
        m.insert("varpi", "𝜛");
        m.insert("rho", "𝜌");
        m.insert("varrho", "𝜚");
        m.insert("sigma", "𝜎");
        m.insert("varsigma", "ς");
        m.insert("tau", "𝜏");
        m.insert("upsilon", "𝜐");
        m.insert("phi", "𝜙");
        m.insert("varphi", "𝜑");
        m.insert("chi", "𝜒");
        m.insert("psi", "𝜓");
        m.insert("omega", "𝜔");
        m.insert("Gamma", "𝛤");
        m.insert("Delta", "𝛥");
        m.insert("Theta", "𝛩");
        m.insert("Lambda", "𝛬");
        m.insert("Xi", "𝛯");
        m.insert("Pi", "𝛱");
        m.insert("Sigma", "𝛴");
        m.insert("Upsilon", "𝛶");
        m.insert("Phi", "𝛷");
        m.insert("Psi", "𝛹");
        m.insert("Omega", "𝛺");
        m.insert("nabla", "∇");
        m.insert("partial", "∂");
        m.insert("int", "∫");
        m.insert("iint", "∫∫");
        m.insert("iint", "∫∫∫");
        m.insert("oint", "∮");
        m.insert("oiint", "∮∮");
        m.insert("Euler", "Ɛ");
        m.insert("Im", "ℑ");
        m.insert("ell", "ℓ");
        m.insert("wp", "℘");
        m.insert("Re", "ℜ");
        m.insert("tcohm", "Ω");
        m.insert("mho", "℧");
        m.insert("Angstroem", "Å");
        m.insert("Finv", "Ⅎ");
        m.insert("aleph", "א");
        m.insert("beth", "ב");
        m.insert("gimel", "ג");
        m.insert("daleth", "ד");
        m.insert("Yup", "⅄");
        m.insert("complement", "∁");
        m.insert("dotplus", "∔");
        m.insert("hslash", "ℏ");
        m.insert("invamp", "⅋");

        // === Combining accents ===
        m.insert("grave", "\u{0300}");
        m.insert("acute", "\u{0301}");
        m.insert("hat", "\u{0302}");
        m.insert("tilde", "\u{0303}");
        m.insert("bar", "\u{0304}");
        m.insert("breve", "\u{0306}");
        m.insert("dot", "\u{0307}");
        m.insert("ddot", "\u{0308}");
        m.insert("dddot", "\u{20DB}");
        m.insert("dddot", "\u{20DC}");
        m.insert("mathring", "\u{030A}");
        m.insert("check", "\u{030C}");
        m.insert("not", "\u{0338}");

        // === Structural commands ===
        m.insert("textstyle", "");
        m.insert("sqrt", "√");
        m.insert("frac", " / ");
        m.insert("sum", "∑");
        m.insert("prod", "∏");
        m.insert("coprod", "∐");
        m.insert("lvec", "\u{20D0}");
        m.insert("vec", "\u{20D1}");
        m.insert("left", "");
        m.insert("right", "");
        m.insert("bigl", "");
        m.insert("bigr", "");
        m.insert("lbrace", "{");
        m.insert("rbrace", "}");
        m.insert("lbrack", "[");
        m.insert("rbrack", "]");
        m.insert("langle", "⟨");
        m.insert("rangle", "⟩");
        m.insert("vert", "|");
        m.insert("Vert", "‖");
        m.insert("CapitalDifferentialD", "ⅅ");
        m.insert("DifferentialD", "ⅆ");
        m.insert("ExponentialE", "ⅇ");
        m.insert("ComplexI", "ⅈ");
        m.insert("ComplexJ", "ⅉ");
        m.insert("over", "/");
        m.insert("style", "");

        // === Spacing ===
        m.insert(",", "\u{2006}");
        m.insert(";", "\u{2009}");
        m.insert(":", "\u{2005}");
        m.insert("!", "");
        m.insert("quad", "\u{2003}");
        m.insert("qquad", "\u{2003}\u{2003}");

        m
    };
}

/// Look up the replacement for a math command name (without backslash)
pub fn lookup_math_symbol(name: &str) -> Option<&'static str> {
    MATH_SYMBOLS.get(name).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_definition_wins() {
        assert_eq!(lookup_math_symbol("leq"), Some("≤"));
        assert_eq!(lookup_math_symbol("geq"), Some("≥"));
        assert_eq!(lookup_math_symbol("ldots"), Some("..."));
        assert_eq!(lookup_math_symbol("iint"), Some("∫∫∫"));
        assert_eq!(lookup_math_symbol("dddot"), Some("\u{20DC}"));
    }

    #[test]
    fn test_single_definitions() {
        assert_eq!(lookup_math_symbol("ge"), Some(">"));
        assert_eq!(lookup_math_symbol("le"), Some("<"));
        assert_eq!(lookup_math_symbol("times"), Some("⨯"));
        assert_eq!(lookup_math_symbol("zeta"), Some("𝜁"));
        assert_eq!(lookup_math_symbol("cup"), Some("∪"));
    }

    #[test]
    fn test_empty_replacements() {
        assert_eq!(lookup_math_symbol("left"), Some(""));
        assert_eq!(lookup_math_symbol("right"), Some(""));
        assert_eq!(lookup_math_symbol("textstyle"), Some(""));
    }

    #[test]
    fn test_unknown() {
        assert_eq!(lookup_math_symbol("sin"), None);
        assert_eq!(lookup_math_symbol(""), None);
    }
}
