/// Specifies the allowed number of arguments for an allow-listed function.
///
/// - `Exact(n)` means the function must receive exactly `n` arguments.
/// - `OneOf(slice)` means the function accepts any arity listed in `slice`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many arguments.
    Exact(usize),
    /// Any of these argument counts.
    OneOf(&'static [usize]),
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity
    /// constraint.
    ///
    /// Returns `true` if the count is permitted, `false` otherwise.
    #[must_use]
    pub fn check(self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == m,
            Self::OneOf(arr) => arr.contains(&n),
        }
    }
}

impl std::fmt::Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{n}"),
            Self::OneOf(arr) => {
                for (i, n) in arr.iter().enumerate() {
                    if i > 0 {
                        write!(f, " or ")?;
                    }
                    write!(f, "{n}")?;
                }
                Ok(())
            },
        }
    }
}

/// Defines the function allow-list by generating the [`Function`] enum and
/// its lookup, arity, and application tables.
///
/// Each entry provides:
/// - the surface-syntax name,
/// - the enum variant,
/// - an arity specification,
/// - the implementation over already-evaluated `f64` arguments.
macro_rules! functions {
    (
        $(
            $name:literal => $variant:ident {
                arity: $arity:expr,
                apply: $apply:expr $(,)?
            }
        ),* $(,)?
    ) => {
        /// A function from the fixed allow-list.
        ///
        /// The parser resolves every call site to one of these variants, so
        /// an AST can only ever call functions defined here.
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum Function {
            $(
                #[doc = concat!("The `", $name, "` function.")]
                $variant,
            )*
        }

        impl Function {
            /// Resolves a function name against the allow-list.
            ///
            /// # Example
            /// ```
            /// use pointcalc::formula::functions::Function;
            ///
            /// assert_eq!(Function::resolve("sin"), Some(Function::Sin));
            /// assert_eq!(Function::resolve("system"), None);
            /// ```
            #[must_use]
            pub fn resolve(name: &str) -> Option<Self> {
                match name {
                    $( $name => Some(Self::$variant), )*
                    _ => None,
                }
            }

            /// The surface-syntax name of the function.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $( Self::$variant => $name, )*
                }
            }

            /// The number of arguments the function accepts.
            #[must_use]
            pub const fn arity(self) -> Arity {
                match self {
                    $( Self::$variant => $arity, )*
                }
            }

            /// Applies the function to already-evaluated arguments.
            ///
            /// Callers must uphold the arity contract: the parser checks
            /// argument counts against [`Self::arity`] before a call node is
            /// ever built. Domain errors (`sqrt` of a negative, `log` of a
            /// non-positive) follow IEEE-754 and produce NaN rather than
            /// failing.
            #[must_use]
            pub fn apply(self, args: &[f64]) -> f64 {
                match self {
                    $(
                        Self::$variant => {
                            let f: fn(&[f64]) -> f64 = $apply;
                            f(args)
                        },
                    )*
                }
            }
        }
    };
}

functions! {
    "sin"     => Sin     { arity: Arity::Exact(1), apply: |args| args[0].sin() },
    "cos"     => Cos     { arity: Arity::Exact(1), apply: |args| args[0].cos() },
    "tan"     => Tan     { arity: Arity::Exact(1), apply: |args| args[0].tan() },
    "asin"    => Asin    { arity: Arity::Exact(1), apply: |args| args[0].asin() },
    "acos"    => Acos    { arity: Arity::Exact(1), apply: |args| args[0].acos() },
    "atan"    => Atan    { arity: Arity::Exact(1), apply: |args| args[0].atan() },
    "sinh"    => Sinh    { arity: Arity::Exact(1), apply: |args| args[0].sinh() },
    "cosh"    => Cosh    { arity: Arity::Exact(1), apply: |args| args[0].cosh() },
    "tanh"    => Tanh    { arity: Arity::Exact(1), apply: |args| args[0].tanh() },
    "sqrt"    => Sqrt    { arity: Arity::Exact(1), apply: |args| args[0].sqrt() },
    "cbrt"    => Cbrt    { arity: Arity::Exact(1), apply: |args| args[0].cbrt() },
    "exp"     => Exp     { arity: Arity::Exact(1), apply: |args| args[0].exp() },
    "ln"      => Ln      { arity: Arity::Exact(1), apply: |args| args[0].ln() },
    "log10"   => Log10   { arity: Arity::Exact(1), apply: |args| args[0].log10() },
    "abs"     => Abs     { arity: Arity::Exact(1), apply: |args| args[0].abs() },
    "floor"   => Floor   { arity: Arity::Exact(1), apply: |args| args[0].floor() },
    "ceil"    => Ceil    { arity: Arity::Exact(1), apply: |args| args[0].ceil() },
    "round"   => Round   { arity: Arity::Exact(1), apply: |args| args[0].round() },
    "sign"    => Sign    { arity: Arity::Exact(1), apply: |args| {
        if args[0] == 0.0 { 0.0 } else { args[0].signum() }
    } },
    "radians" => Radians { arity: Arity::Exact(1), apply: |args| args[0].to_radians() },
    "degrees" => Degrees { arity: Arity::Exact(1), apply: |args| args[0].to_degrees() },
    "atan2"   => Atan2   { arity: Arity::Exact(2), apply: |args| args[0].atan2(args[1]) },
    "hypot"   => Hypot   { arity: Arity::Exact(2), apply: |args| args[0].hypot(args[1]) },
    "min"     => Min     { arity: Arity::Exact(2), apply: |args| args[0].min(args[1]) },
    "max"     => Max     { arity: Arity::Exact(2), apply: |args| args[0].max(args[1]) },
    "pow"     => Pow     { arity: Arity::Exact(2), apply: |args| args[0].powf(args[1]) },
    "log"     => Log     { arity: Arity::OneOf(&[1, 2]), apply: |args| {
        if args.len() == 2 { args[0].log(args[1]) } else { args[0].ln() }
    } },
}

/// Resolves a named mathematical constant.
///
/// Constants are part of the fixed vocabulary alongside the function
/// allow-list; the parser substitutes them with literals, so they cost
/// nothing at evaluation time.
///
/// # Example
/// ```
/// use pointcalc::formula::functions::constant;
///
/// assert_eq!(constant("pi"), Some(std::f64::consts::PI));
/// assert_eq!(constant("phi"), None);
/// ```
#[must_use]
pub fn constant(name: &str) -> Option<f64> {
    match name {
        "pi" => Some(std::f64::consts::PI),
        "e" => Some(std::f64::consts::E),
        "tau" => Some(std::f64::consts::TAU),
        _ => None,
    }
}
