/*! Abstract C syntax the lowering pass targets.
 *
 * Just enough C to express the generated shape: one include, a forward
 * declaration, and a definition whose body is a flat statement list. The
 * `Display` impls are the printer; statements indent two spaces, labels sit
 * at column zero, declarations in a unit are separated by a blank line.
 */

use std::fmt;

/// Generated code traffics exclusively in the boxed runtime value; per-type
/// specialization is not wired up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CType {
    Value,
}

impl fmt::Display for CType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CType::Value => write!(f, "SblValue"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CExpr {
    Ident(String),
    Number(f64),
    Bool(bool),
    Call {
        callee: Box<CExpr>,
        args: Vec<CExpr>,
    },
    /// Inert placeholder in expression position.
    Comment(String),
}

impl fmt::Display for CExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CExpr::Ident(name) => write!(f, "{}", name),
            CExpr::Number(n) => write!(f, "{}", n),
            CExpr::Bool(b) => write!(f, "{}", b),
            CExpr::Call { callee, args } => {
                write!(f, "{}(", callee)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
            CExpr::Comment(text) => write!(f, "/* {} */", text),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CStmt {
    Local {
        name: String,
        ty: CType,
        init: CExpr,
    },
    Return(CExpr),
    Label(String),
    /// Inert placeholder in statement position.
    Comment(String),
}

impl CStmt {
    fn is_label(&self) -> bool {
        matches!(self, CStmt::Label(_))
    }
}

impl fmt::Display for CStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CStmt::Local { name, ty, init } => write!(f, "{} {} = {};", ty, name, init),
            CStmt::Return(expr) => write!(f, "return {};", expr),
            CStmt::Label(name) => write!(f, "{}:", name),
            CStmt::Comment(text) => write!(f, "/* {} */", text),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CParam {
    pub name: String,
    pub ty: CType,
}

impl fmt::Display for CParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.ty, self.name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CDecl {
    Include(String),
    FuncDecl {
        name: String,
        params: Vec<CParam>,
        returns: CType,
    },
    FuncDef {
        name: String,
        params: Vec<CParam>,
        returns: CType,
        body: Vec<CStmt>,
    },
}

fn write_params(f: &mut fmt::Formatter<'_>, params: &[CParam]) -> fmt::Result {
    for (i, param) in params.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", param)?;
    }
    Ok(())
}

impl fmt::Display for CDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CDecl::Include(path) => write!(f, "#include \"{}\"", path),
            CDecl::FuncDecl {
                name,
                params,
                returns,
            } => {
                write!(f, "{} {}(", returns, name)?;
                write_params(f, params)?;
                write!(f, ");")
            }
            CDecl::FuncDef {
                name,
                params,
                returns,
                body,
            } => {
                write!(f, "{} {}(", returns, name)?;
                write_params(f, params)?;
                write!(f, ") {{")?;
                for stmt in body {
                    writeln!(f)?;
                    if !stmt.is_label() {
                        write!(f, "  ")?;
                    }
                    write!(f, "{}", stmt)?;
                }
                write!(f, "\n}}")
            }
        }
    }
}

/// One generated translation unit.
#[derive(Debug, Clone, PartialEq)]
pub struct CUnit {
    pub decls: Vec<CDecl>,
}

impl fmt::Display for CUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, decl) in self.decls.iter().enumerate() {
            if i > 0 {
                write!(f, "\n\n")?;
            }
            write!(f, "{}", decl)?;
        }
        Ok(())
    }
}
