//! Stan vocabulary used to classify identifiers

/// Control flow and statement keywords
pub const KEYWORDS: &[&str] = &[
    "for", "in", "while", "repeat", "until", "if", "then", "else", "true", "false", "target",
    "print", "reject", "fatal_error", "return", "break", "continue", "profile", "increment_log_prob",
    "integrate_ode", "get_lp",
];

/// Program block names that stand alone (`transformed` and `generated`
/// prefixes are handled by the lexer)
pub const BLOCKS: &[&str] = &["functions", "data", "parameters", "model"];

/// Variable and return types
pub const TYPES: &[&str] = &[
    "int",
    "real",
    "complex",
    "vector",
    "row_vector",
    "matrix",
    "complex_vector",
    "complex_row_vector",
    "complex_matrix",
    "simplex",
    "unit_vector",
    "sum_to_zero_vector",
    "ordered",
    "positive_ordered",
    "cov_matrix",
    "corr_matrix",
    "cholesky_factor_cov",
    "cholesky_factor_corr",
    "column_stochastic_matrix",
    "row_stochastic_matrix",
    "array",
    "tuple",
    "void",
    "data",
];

/// Constraint keywords, only keywords before `=` inside `< >`
pub const CONSTRAINTS: &[&str] = &["lower", "upper", "offset", "multiplier"];

/// Words reserved by the language or its C++ backend
///
/// Besides this list, every identifier ending in `__` (such as `lp__`) is
/// reserved for the compiler, and the lexer classifies those as reserved too.
pub const RESERVED: &[&str] = &[
    "auto", "char", "class", "const", "delete", "double", "enum", "export", "extern", "float",
    "friend", "goto", "inline", "long", "namespace", "new", "operator", "private", "protected",
    "public", "register", "short", "signed", "sizeof", "static", "struct", "switch", "template",
    "this", "throw", "try", "typedef", "typeid", "typename", "union", "unsigned", "using",
    "virtual", "volatile", "lp__", "var", "fvar", "STAN_MAJOR", "STAN_MINOR", "STAN_PATCH",
    "STAN_MATH_MAJOR", "STAN_MATH_MINOR", "STAN_MATH_PATCH",
];

/// Built-in (non-distribution) functions
pub const FUNCTIONS: &[&str] = &[
    "abs", "acos", "acosh", "add_diag", "algebra_solver", "algebra_solver_newton", "append_array",
    "append_col", "append_row", "asin", "asinh", "atan", "atan2", "atanh", "bessel_first_kind",
    "bessel_second_kind", "binary_log_loss", "block", "cbrt", "ceil", "chol2inv",
    "cholesky_decompose", "choose", "col", "cols", "columns_dot_product", "columns_dot_self",
    "complex_schur_decompose", "conj", "cos", "cosh", "cov_exp_quad", "crossprod", "csr_extract",
    "csr_matrix_times_vector", "csr_to_dense_matrix", "cumulative_sum", "determinant", "diag_matrix",
    "diag_post_multiply", "diag_pre_multiply", "diagonal", "digamma", "dims", "distance",
    "dot_product", "dot_self", "e", "eigendecompose", "eigendecompose_sym", "eigenvalues",
    "eigenvalues_sym", "eigenvectors", "eigenvectors_sym", "erf", "erfc", "exp", "exp2", "expm1",
    "falling_factorial", "fdim", "fft", "fft2", "floor", "fma", "fmax", "fmin", "fmod", "gamma_p",
    "gamma_q", "generalized_inverse", "get_imag", "get_real", "head", "hmm_hidden_state_prob",
    "hmm_latent_rng", "hmm_marginal", "hypot", "identity_matrix", "inc_beta", "int_step",
    "integrate_1d", "integrate_ode_adams", "integrate_ode_bdf", "integrate_ode_rk45", "inv",
    "inv_cloglog", "inv_erfc", "inv_fft", "inv_fft2", "inv_inc_beta", "inv_logit", "inv_Phi",
    "inv_sqrt", "inv_square", "inverse", "inverse_spd", "is_inf", "is_nan", "lambert_w0",
    "lambert_wm1", "lbeta", "lchoose", "ldexp", "lgamma", "linspaced_array",
    "linspaced_int_array", "linspaced_row_vector", "linspaced_vector", "lmgamma", "lmultiply",
    "log", "log10", "log1m", "log1m_exp", "log1m_inv_logit", "log1p", "log1p_exp", "log2",
    "log_determinant", "log_diff_exp", "log_falling_factorial", "log_inv_logit",
    "log_inv_logit_diff", "log_mix", "log_modified_bessel_first_kind", "log_rising_factorial",
    "log_softmax", "log_sum_exp", "logical_and", "logical_eq", "logical_gt", "logical_gte",
    "logical_lt", "logical_lte", "logical_negation", "logical_neq", "logical_or", "logit",
    "machine_precision", "map_rect", "matrix_exp", "matrix_exp_multiply", "matrix_power", "max",
    "mdivide_left", "mdivide_left_spd", "mdivide_left_tri_low", "mdivide_right",
    "mdivide_right_spd", "mdivide_right_tri_low", "mean", "min", "modified_bessel_first_kind",
    "modified_bessel_second_kind", "multiply_log", "multiply_lower_tri_self_transpose",
    "negative_infinity", "norm", "norm1", "norm2", "not_a_number", "num_elements", "ode_adams",
    "ode_adams_tol", "ode_adjoint_tol_ctl", "ode_bdf", "ode_bdf_tol", "ode_ckrk", "ode_ckrk_tol",
    "ode_rk45", "ode_rk45_tol", "one_hot_array", "one_hot_int_array", "one_hot_row_vector",
    "one_hot_vector", "ones_array", "ones_int_array", "ones_row_vector", "ones_vector", "owens_t",
    "Phi", "Phi_approx", "pi", "polar", "positive_infinity", "pow", "prod", "proj",
    "qr", "qr_Q", "qr_R", "qr_thin", "qr_thin_Q", "qr_thin_R", "quad_form", "quad_form_diag",
    "quad_form_sym", "quantile", "rank", "reduce_sum", "reduce_sum_static", "rep_array",
    "rep_matrix", "rep_row_vector", "rep_vector", "reverse", "rising_factorial", "round", "row",
    "rows", "rows_dot_product", "rows_dot_self", "scale_matrix_exp_multiply", "sd", "segment",
    "sin", "singular_values", "sinh", "size", "softmax", "sort_asc", "sort_desc",
    "sort_indices_asc", "sort_indices_desc", "sqrt", "sqrt2", "square", "squared_distance",
    "step", "sub_col", "sub_row", "sum", "svd", "svd_U", "svd_V", "symmetrize_from_lower_tri",
    "tail", "tan", "tanh", "target", "tcrossprod", "tgamma", "to_array_1d", "to_array_2d",
    "to_complex", "to_int", "to_matrix", "to_row_vector", "to_vector", "trace",
    "trace_gen_quad_form", "trace_quad_form", "trigamma", "trunc", "uniform_simplex", "variance",
    "zeros_array", "zeros_int_array", "zeros_row_vector", "zeros_vector",
];

/// Probability distributions usable after `~` and with `_lpdf`-style suffixes
pub const DISTRIBUTIONS: &[&str] = &[
    "bernoulli", "bernoulli_logit", "bernoulli_logit_glm", "beta", "beta_binomial",
    "beta_proportion", "binomial", "binomial_logit", "binomial_logit_glm", "categorical",
    "categorical_logit", "categorical_logit_glm", "cauchy", "chi_square", "dirichlet",
    "dirichlet_multinomial", "discrete_range", "double_exponential", "exp_mod_normal",
    "exponential", "frechet", "gamma", "gaussian_dlm_obs", "gumbel", "hypergeometric",
    "inv_chi_square", "inv_gamma", "inv_wishart", "inv_wishart_cholesky", "lkj_corr",
    "lkj_corr_cholesky", "logistic", "loglogistic", "lognormal", "multi_gp", "multi_gp_cholesky",
    "multi_normal", "multi_normal_cholesky", "multi_normal_prec", "multi_student_t",
    "multi_student_t_cholesky", "multinomial", "multinomial_logit", "neg_binomial",
    "neg_binomial_2", "neg_binomial_2_log", "neg_binomial_2_log_glm", "normal", "normal_id_glm",
    "ordered_logistic", "ordered_logistic_glm", "ordered_probit", "pareto", "pareto_type_2",
    "poisson", "poisson_log", "poisson_log_glm", "rayleigh", "scaled_inv_chi_square",
    "skew_double_exponential", "skew_normal", "std_normal", "student_t", "uniform", "von_mises",
    "weibull", "wiener", "wishart", "wishart_cholesky",
];

/// Suffixes turning a distribution name into a callable function
pub const DISTRIBUTION_SUFFIXES: &[&str] = &[
    "_lpdf", "_lupdf", "_lpmf", "_lupmf", "_cdf", "_lcdf", "_lccdf", "_rng", "_log",
    "_cdf_log", "_ccdf_log",
];

/// Whether `word` is a distribution function such as `normal_lpdf`
pub fn is_distribution_function(word: &str) -> bool {
    DISTRIBUTION_SUFFIXES.iter().any(|suffix| {
        word.strip_suffix(suffix)
            .is_some_and(|base| DISTRIBUTIONS.contains(&base))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distribution_functions() {
        assert!(is_distribution_function("normal_lpdf"));
        assert!(is_distribution_function("poisson_log_rng"));
        assert!(is_distribution_function("student_t_lccdf"));
        assert!(!is_distribution_function("normal"));
        assert!(!is_distribution_function("my_model_lpdf"));
    }

    #[test]
    fn test_lists_are_disjoint_where_it_matters() {
        for word in KEYWORDS {
            assert!(!TYPES.contains(word), "{} is both keyword and type", word);
        }
    }
}
