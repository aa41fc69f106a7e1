//! The canonical list of Unicode <-> LaTeX correspondences.
//!
//! Order is significant: the first entry for a given LaTeX spelling decides
//! how it decodes, and the first entry for a given character decides how it
//! encodes.

use super::Entry;

pub static STANDARD_ENTRIES: &[Entry<'static>] = &[
    // special symbols
    Entry::text("\n\n", r" \par").decode_only(),
    Entry::text("\n\n", r"\par").decode_only(),
    Entry::text(" ", r"\ ").decode_only(),
    Entry::text("%", r"\%"),
    Entry::text("–", r"--"),
    Entry::text("–", r"\textendash"),
    Entry::text("—", r"---"),
    Entry::text("—", r"\textemdash"),
    Entry::text("‘", r"`").encode_only(),
    Entry::text("’", r"'").encode_only(),
    Entry::text("“", r"``"),
    Entry::text("”", r"''"),
    Entry::text("„", r"\glqq"),
    Entry::text("†", r"\dag"),
    Entry::text("‡", r"\ddag"),
    Entry::text("\\", r"\textbackslash").decode_only(),
    Entry::math("\\", r"\backslash").decode_only(),
    Entry::math("∼", r"\sim"),
    Entry::text("\u{02F7}", r"\texttildelow"),
    Entry::text("\u{02DC}", r"\~{}"),
    Entry::text("~", r"\textasciitilde"),
    Entry::math("•", r"\bullet"),
    Entry::text("•", r"\textbullet"),
    Entry::text("#", r"\#"),
    Entry::text("_", r"\_"),
    Entry::text("&", r"\&"),
    Entry::text("\u{00A0}", r"~"),
    Entry::text("¡", r"!`"),
    Entry::text("¢", r"\not{c}"),
    Entry::text("£", r"\pounds"),
    Entry::text("£", r"\textsterling"),
    Entry::text("§", r"\S"),
    Entry::text("\u{00A8}", r#"\"{}"#),
    Entry::text("¬", r"\neg"),
    Entry::text("\u{00AD}", r"\-"),
    Entry::text("\u{00AF}", r"\={}"),
    Entry::math("°", r"^\circ"),
    Entry::text("°", r"\textdegree"),
    Entry::math("±", r"\pm"),
    Entry::text("±", r"\textpm"),
    Entry::math("²", r"^2"),
    Entry::text("²", r"\texttwosuperior"),
    Entry::math("³", r"^3"),
    Entry::text("³", r"\textthreesuperior"),
    Entry::text("\u{00B4}", r"\'{}"),
    Entry::math("µ", r"\mu"),
    Entry::text("µ", r"\micro"),
    Entry::text("¶", r"\P"),
    Entry::math("·", r"\cdot"),
    Entry::text("·", r"\textperiodcentered"),
    Entry::text("\u{00B8}", r"\c{}"),
    Entry::math("¹", r"^1"),
    Entry::text("¹", r"\textonesuperior"),
    Entry::text("¿", r"?`"),
    // latin-1 supplement
    Entry::text("À", r"\`A"),
    Entry::text("Â", r"\^A"),
    Entry::text("Ã", r"\~A"),
    Entry::text("Ä", r#"\"A"#),
    Entry::text("Å", r"\AA"),
    Entry::text("Æ", r"\AE"),
    Entry::text("Ç", r"\c C"),
    Entry::text("È", r"\`E"),
    Entry::text("É", r"\'E"),
    Entry::text("Ê", r"\^E"),
    Entry::text("Ë", r#"\"E"#),
    Entry::text("Ì", r"\`I"),
    Entry::text("Î", r"\^I"),
    Entry::text("Ï", r#"\"I"#),
    Entry::text("Ñ", r"\~N"),
    Entry::text("Ò", r"\`O"),
    Entry::text("Ó", r"\'O"),
    Entry::text("Ô", r"\^O"),
    Entry::text("Õ", r"\~O"),
    Entry::text("Ö", r#"\"O"#),
    Entry::math("×", r"\times"),
    Entry::text("Ø", r"\O"),
    Entry::text("Ù", r"\`U"),
    Entry::text("Ú", r"\'U"),
    Entry::text("Û", r"\^U"),
    Entry::text("Ü", r#"\"U"#),
    Entry::text("Ý", r"\'Y"),
    Entry::text("ß", r"\ss"),
    Entry::text("à", r"\`a"),
    Entry::text("á", r"\'a"),
    Entry::text("â", r"\^a"),
    Entry::text("ã", r"\~a"),
    Entry::text("ä", r#"\"a"#),
    Entry::text("å", r"\aa"),
    Entry::text("æ", r"\ae"),
    Entry::text("ç", r"\c c"),
    Entry::text("è", r"\`e"),
    Entry::text("é", r"\'e"),
    Entry::text("ê", r"\^e"),
    Entry::text("ë", r#"\"e"#),
    Entry::text("ì", r"\`\i"),
    Entry::text("ì", r"\`i"),
    Entry::text("í", r"\'\i"),
    Entry::text("í", r"\'i"),
    Entry::text("î", r"\^\i"),
    Entry::text("î", r"\^i"),
    Entry::text("ï", r#"\"\i"#),
    Entry::text("ï", r#"\"i"#),
    Entry::text("ñ", r"\~n"),
    Entry::text("ò", r"\`o"),
    Entry::text("ó", r"\'o"),
    Entry::text("ô", r"\^o"),
    Entry::text("õ", r"\~o"),
    Entry::text("ö", r#"\"o"#),
    Entry::math("÷", r"\div"),
    Entry::text("ø", r"\o"),
    Entry::text("ù", r"\`u"),
    Entry::text("ú", r"\'u"),
    Entry::text("û", r"\^u"),
    Entry::text("ü", r#"\"u"#),
    Entry::text("ý", r"\'y"),
    Entry::text("ÿ", r#"\"y"#),
    // latin extended-a and -b
    Entry::text("Ā", r"\=A"),
    Entry::text("ā", r"\=a"),
    Entry::text("Ă", r"\u A"),
    Entry::text("ă", r"\u a"),
    Entry::text("Ą", r"\k A"),
    Entry::text("ą", r"\k a"),
    Entry::text("Ć", r"\'C"),
    Entry::text("ć", r"\'c"),
    Entry::text("Ĉ", r"\^C"),
    Entry::text("ĉ", r"\^c"),
    Entry::text("Ċ", r"\.C"),
    Entry::text("ċ", r"\.c"),
    Entry::text("Č", r"\v C"),
    Entry::text("č", r"\v c"),
    Entry::text("Ď", r"\v D"),
    Entry::text("ď", r"\v d"),
    Entry::text("Ē", r"\=E"),
    Entry::text("ē", r"\=e"),
    Entry::text("Ĕ", r"\u E"),
    Entry::text("ĕ", r"\u e"),
    Entry::text("Ė", r"\.E"),
    Entry::text("ė", r"\.e"),
    Entry::text("Ę", r"\k E"),
    Entry::text("ę", r"\k e"),
    Entry::text("Ě", r"\v E"),
    Entry::text("ě", r"\v e"),
    Entry::text("Ĝ", r"\^G"),
    Entry::text("ĝ", r"\^g"),
    Entry::text("Ğ", r"\u G"),
    Entry::text("ğ", r"\u g"),
    Entry::text("Ġ", r"\.G"),
    Entry::text("ġ", r"\.g"),
    Entry::text("Ģ", r"\c G"),
    Entry::text("ģ", r"\c g"),
    Entry::text("Ĥ", r"\^H"),
    Entry::text("ĥ", r"\^h"),
    Entry::text("Ĩ", r"\~I"),
    Entry::text("ĩ", r"\~\i"),
    Entry::text("ĩ", r"\~i"),
    Entry::text("Ī", r"\=I"),
    Entry::text("ī", r"\=\i"),
    Entry::text("ī", r"\=i"),
    Entry::text("Ĭ", r"\u I"),
    Entry::text("ĭ", r"\u\i"),
    Entry::text("ĭ", r"\u i"),
    Entry::text("Į", r"\k I"),
    Entry::text("į", r"\k i"),
    Entry::text("İ", r"\.I"),
    Entry::text("ı", r"\i"),
    Entry::text("Ĳ", r"IJ").encode_only(),
    Entry::text("ĳ", r"ij").encode_only(),
    Entry::text("Ĵ", r"\^J"),
    Entry::text("ĵ", r"\^\j"),
    Entry::text("ĵ", r"\^j"),
    Entry::text("Ķ", r"\c K"),
    Entry::text("ķ", r"\c k"),
    Entry::text("Ĺ", r"\'L"),
    Entry::text("ĺ", r"\'l"),
    Entry::text("Ļ", r"\c L"),
    Entry::text("ļ", r"\c l"),
    Entry::text("Ľ", r"\v L"),
    Entry::text("ľ", r"\v l"),
    Entry::text("Ł", r"\L"),
    Entry::text("ł", r"\l"),
    Entry::text("Ń", r"\'N"),
    Entry::text("ń", r"\'n"),
    Entry::text("Ņ", r"\c N"),
    Entry::text("ņ", r"\c n"),
    Entry::text("Ň", r"\v N"),
    Entry::text("ň", r"\v n"),
    Entry::text("Ō", r"\=O"),
    Entry::text("ō", r"\=o"),
    Entry::text("Ŏ", r"\u O"),
    Entry::text("ŏ", r"\u o"),
    Entry::text("Ő", r"\H O"),
    Entry::text("ő", r"\H o"),
    Entry::text("Œ", r"\OE"),
    Entry::text("œ", r"\oe"),
    Entry::text("Ŕ", r"\'R"),
    Entry::text("ŕ", r"\'r"),
    Entry::text("Ŗ", r"\c R"),
    Entry::text("ŗ", r"\c r"),
    Entry::text("Ř", r"\v R"),
    Entry::text("ř", r"\v r"),
    Entry::text("Ś", r"\'S"),
    Entry::text("ś", r"\'s"),
    Entry::text("Ŝ", r"\^S"),
    Entry::text("ŝ", r"\^s"),
    Entry::text("Ş", r"\c S"),
    Entry::text("ş", r"\c s"),
    Entry::text("Š", r"\v S"),
    Entry::text("š", r"\v s"),
    Entry::text("Ţ", r"\c T"),
    Entry::text("ţ", r"\c t"),
    Entry::text("Ť", r"\v T"),
    Entry::text("ť", r"\v t"),
    Entry::text("Ũ", r"\~U"),
    Entry::text("ũ", r"\~u"),
    Entry::text("Ū", r"\=U"),
    Entry::text("ū", r"\=u"),
    Entry::text("Ŭ", r"\u U"),
    Entry::text("ŭ", r"\u u"),
    Entry::text("Ů", r"\r U"),
    Entry::text("ů", r"\r u"),
    Entry::text("Ű", r"\H U"),
    Entry::text("ű", r"\H u"),
    Entry::text("Ų", r"\k U"),
    Entry::text("ų", r"\k u"),
    Entry::text("Ŵ", r"\^W"),
    Entry::text("ŵ", r"\^w"),
    Entry::text("Ŷ", r"\^Y"),
    Entry::text("ŷ", r"\^y"),
    Entry::text("Ÿ", r#"\"Y"#),
    Entry::text("Ź", r"\'Z"),
    Entry::text("ź", r"\'z"),
    Entry::text("Ż", r"\.Z"),
    Entry::text("ż", r"\.z"),
    Entry::text("Ž", r"\v Z"),
    Entry::text("ž", r"\v z"),
    Entry::text("Ǆ", r"D\v Z"),
    Entry::text("ǅ", r"D\v z"),
    Entry::text("ǆ", r"d\v z"),
    Entry::text("Ǉ", r"LJ").encode_only(),
    Entry::text("ǈ", r"Lj").encode_only(),
    Entry::text("ǉ", r"lj").encode_only(),
    Entry::text("Ǌ", r"NJ").encode_only(),
    Entry::text("ǋ", r"Nj").encode_only(),
    Entry::text("ǌ", r"nj").encode_only(),
    Entry::text("Ǎ", r"\v A"),
    Entry::text("ǎ", r"\v a"),
    Entry::text("Ǐ", r"\v I"),
    Entry::text("ǐ", r"\v\i"),
    Entry::text("Ǒ", r"\v O"),
    Entry::text("ǒ", r"\v o"),
    Entry::text("Ǔ", r"\v U"),
    Entry::text("ǔ", r"\v u"),
    Entry::text("Ǧ", r"\v G"),
    Entry::text("ǧ", r"\v g"),
    Entry::text("Ǩ", r"\v K"),
    Entry::text("ǩ", r"\v k"),
    Entry::text("Ǫ", r"\k O"),
    Entry::text("ǫ", r"\k o"),
    Entry::text("ǰ", r"\v\j"),
    Entry::text("Ǳ", r"DZ").encode_only(),
    Entry::text("ǲ", r"Dz").encode_only(),
    Entry::text("ǳ", r"dz").encode_only(),
    Entry::text("Ǵ", r"\'G"),
    Entry::text("ǵ", r"\'g"),
    Entry::text("Ǽ", r"\'\AE"),
    Entry::text("ǽ", r"\'\ae"),
    Entry::text("Ǿ", r"\'\O"),
    Entry::text("ǿ", r"\'\o"),
    // mathematical operators and arrows
    Entry::math("∂", r"\partial"),
    Entry::math("∏", r"\prod"),
    Entry::math("∑", r"\sum"),
    Entry::math("√", r"\surd"),
    Entry::math("∞", r"\infty"),
    Entry::math("∫", r"\int"),
    Entry::math("∩", r"\cap"),
    Entry::math("∪", r"\cup"),
    Entry::math("→", r"\rightarrow"),
    Entry::math("⇒", r"\Rightarrow"),
    Entry::math("←", r"\leftarrow"),
    Entry::math("⇐", r"\Leftarrow"),
    Entry::math("∨", r"\vee"),
    Entry::math("∧", r"\wedge"),
    Entry::math("≈", r"\approx"),
    Entry::math("≠", r"\neq"),
    Entry::math("≤", r"\leq"),
    Entry::math("≥", r"\geq"),
    // spacing accents
    Entry::text("\u{02C6}", r"\^{}"),
    Entry::text("\u{02C7}", r"\v{}"),
    Entry::text("\u{02D8}", r"\u{}"),
    Entry::text("\u{02D9}", r"\.{}"),
    Entry::text("\u{02DA}", r"\r{}"),
    Entry::text("\u{02DB}", r"\k{}"),
    Entry::text("\u{02DD}", r"\H{}"),
    // ligatures, encode only
    Entry::text("ﬁ", r"fi").encode_only(),
    Entry::text("ﬂ", r"fl").encode_only(),
    Entry::text("ﬀ", r"ff").encode_only(),
    // greek
    Entry::math("α", r"\alpha"),
    Entry::math("β", r"\beta"),
    Entry::math("γ", r"\gamma"),
    Entry::math("δ", r"\delta"),
    Entry::math("ε", r"\epsilon"),
    Entry::math("ζ", r"\zeta"),
    Entry::math("η", r"\eta"),
    Entry::math("θ", r"\theta"),
    Entry::math("ι", r"\iota"),
    Entry::math("κ", r"\kappa"),
    Entry::math("λ", r"\lambda"),
    Entry::math("μ", r"\mu"),
    Entry::math("ν", r"\nu"),
    Entry::math("ξ", r"\xi"),
    Entry::math("ο", r"\omicron"),
    Entry::math("π", r"\pi"),
    Entry::math("ρ", r"\rho"),
    Entry::math("σ", r"\sigma"),
    Entry::math("τ", r"\tau"),
    Entry::math("υ", r"\upsilon"),
    Entry::math("φ", r"\phi"),
    Entry::math("χ", r"\chi"),
    Entry::math("ψ", r"\psi"),
    Entry::math("ω", r"\omega"),
    Entry::math("Α", r"\Alpha"),
    Entry::math("Β", r"\Beta"),
    Entry::math("Γ", r"\Gamma"),
    Entry::math("Δ", r"\Delta"),
    Entry::math("Ε", r"\Epsilon"),
    Entry::math("Ζ", r"\Zeta"),
    Entry::math("Η", r"\Eta"),
    Entry::math("Θ", r"\Theta"),
    Entry::math("Ι", r"\Iota"),
    Entry::math("Κ", r"\Kappa"),
    Entry::math("Λ", r"\Lambda"),
    Entry::math("Μ", r"\Mu"),
    Entry::math("Ν", r"\Nu"),
    Entry::math("Ξ", r"\Xi"),
    Entry::math("Ο", r"\Omicron"),
    Entry::math("Π", r"\Pi"),
    Entry::math("Ρ", r"\Rho"),
    Entry::math("Σ", r"\Sigma"),
    Entry::math("Τ", r"\Tau"),
    Entry::math("Υ", r"\Upsilon"),
    Entry::math("Φ", r"\Phi"),
    Entry::math("Χ", r"\Chi"),
    Entry::math("Ψ", r"\Psi"),
    Entry::math("Ω", r"\Omega"),
    // miscellaneous
    Entry::text("©", r"\copyright"),
    Entry::text("©", r"\textcopyright"),
    Entry::text("Á", r"\'A"),
    Entry::text("Í", r"\'I"),
    Entry::text("…", r"\ldots"),
    Entry::math("™", r"^{TM}"),
    Entry::text("™", r"\texttrademark"),
    Entry::text("Ǭ", r"\textogonekcentered{\=O}").encode_only(),
    Entry::text("ǭ", r"\textogonekcentered{\=o}").encode_only(),
    Entry::math("ℕ", r"\mathbb{N}"),
    Entry::math("ℕ", r"\mathbb N").encode_only(),
    Entry::math("ℤ", r"\mathbb{Z}"),
    Entry::math("ℤ", r"\mathbb Z").encode_only(),
    Entry::math("ℚ", r"\mathbb{Q}"),
    Entry::math("ℚ", r"\mathbb Q").encode_only(),
    Entry::math("ℝ", r"\mathbb{R}"),
    Entry::math("ℝ", r"\mathbb R").encode_only(),
    Entry::math("ℂ", r"\mathbb{C}"),
    Entry::math("ℂ", r"\mathbb C").encode_only(),
];
